use url::Url;

use crate::tags::TagSet;

/// Icon reference used when a classification response carries no usable
/// favicon.
pub const DEFAULT_FAVICON: &str = "default-icon.png";

/// A successful classification outcome as the core sees it.
///
/// The wire representation lives in the client crate; the popup shell maps
/// responses into this shape before dispatching them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub url: String,
    pub title: String,
    pub site_name: String,
    pub category: String,
    pub tags: TagSet,
    pub content: String,
    pub favicon_url: Option<String>,
}

/// The closed set of category values offered by the surrounding UI.
///
/// The list itself is configuration owned by the shell; the core only
/// enforces that a record's category is a member or unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryOptions {
    options: Vec<String>,
}

impl CategoryOptions {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.options.iter().any(|option| option == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}

/// The full set of editable metadata describing one analyzed page.
///
/// `url` is the address the classification reported (the visit link); the
/// page-URL snapshot that seeds the save payload lives on the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub site_name: String,
    pub category: Option<String>,
    pub tags: TagSet,
    pub content: String,
    pub favicon_url: String,
}

impl PageRecord {
    /// Projects a classification outcome onto a fresh record, replacing any
    /// prior state wholesale.
    ///
    /// `fallback_url` fills in when the response itself carries no URL. A
    /// category outside `options` maps to unset, a blank favicon falls back
    /// to `default_favicon`, and a blank site name is derived from the URL
    /// host when possible.
    pub fn from_classification(
        classification: Classification,
        options: &CategoryOptions,
        fallback_url: &str,
        default_favicon: &str,
    ) -> Self {
        let Classification {
            url,
            title,
            site_name,
            category,
            tags,
            content,
            favicon_url,
        } = classification;

        let url = if url.trim().is_empty() {
            fallback_url.to_owned()
        } else {
            url
        };
        let site_name = if site_name.trim().is_empty() {
            derive_site_name(&url).unwrap_or(site_name)
        } else {
            site_name
        };
        let category = Some(category).filter(|category| options.contains(category));
        let favicon_url = favicon_url
            .filter(|favicon| !favicon.trim().is_empty())
            .unwrap_or_else(|| default_favicon.to_owned());

        Self {
            url,
            title,
            site_name,
            category,
            tags,
            content,
            favicon_url,
        }
    }

    /// Reads every editable field verbatim into a save payload, with no
    /// re-validation. `live_url` is the page-URL field as shown at the
    /// moment of the save click.
    pub fn to_save_payload(&self, live_url: &str) -> SavePayload {
        SavePayload {
            url: live_url.to_owned(),
            title: self.title.clone(),
            site_name: self.site_name.clone(),
            category: self.category.clone().unwrap_or_default(),
            tags: self.tags.to_vec(),
            content: self.content.clone(),
            favicon_url: self.favicon_url.clone(),
        }
    }
}

/// What gets handed to the persistence collaborator on save. An unset
/// category serializes as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePayload {
    pub url: String,
    pub title: String,
    pub site_name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
    pub favicon_url: String,
}

/// Derives a display site name from a URL host, dropping any `www.` prefix.
pub fn derive_site_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_owned())
    }
}
