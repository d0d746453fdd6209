//! Shared constants

/// UI strings and directory names
pub mod ui {
    /// Name of the config directory under the user's home
    pub const CONFIG_DIR_NAME: &str = ".skillmatrix";
    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";
    /// Log file name inside the logs directory
    pub const LOG_FILE_NAME: &str = "skillmatrix.log";

    pub const APP_TITLE: &str = "SKILL MATRIX APP";
    pub const SEARCH_PLACEHOLDER: &str = "Search by employee name or skill...";
    pub const NAME_PLACEHOLDER: &str = "Employee Name";
    pub const SKILL_SET_PLACEHOLDER: &str = "Select Skill Set";
    pub const LEVEL_PLACEHOLDER: &str = "Select Level";
    pub const NO_RECORDS: &str = "No records found";
    pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";
}
