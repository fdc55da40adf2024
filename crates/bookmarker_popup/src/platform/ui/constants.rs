/// Category options offered by the picker, matching the saved-links site.
pub const CATEGORY_OPTIONS: [&str; 8] = [
    "Entertainment & Media",
    "Science & Learning",
    "News & Politics",
    "Howto & Style",
    "Sports",
    "Autos & Vehicles",
    "Lifestyle & Pets",
    "Travel & Adventures",
];

pub const SAVED_MESSAGE: &str = "Content saved successfully!";
pub const DUPLICATE_MESSAGE: &str = "This link is already saved.";

// Terminal command vocabulary.
pub const CMD_ANALYZE: &str = "analyze";
pub const CMD_SAVE: &str = "save";
pub const CMD_TAG: &str = "tag";
pub const CMD_TAG_ADD: &str = "add";
pub const CMD_TAG_REMOVE: &str = "rm";
pub const CMD_CATEGORY: &str = "category";
pub const CMD_URL: &str = "url";
pub const CMD_EXPLORE: &str = "explore";
pub const CMD_SHOW: &str = "show";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
