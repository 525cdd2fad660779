//! Platform limits applied by the built-in composition objects.

/// Maximum characters in a confirmation dialog title.
pub const CONFIRM_TITLE_MAX_LENGTH: usize = 100;

/// Maximum characters in a confirmation dialog body.
pub const CONFIRM_TEXT_MAX_LENGTH: usize = 300;

/// Maximum characters in a confirmation dialog button label.
pub const CONFIRM_BUTTON_MAX_LENGTH: usize = 30;

/// Maximum characters in an option's text.
pub const OPTION_TEXT_MAX_LENGTH: usize = 75;

/// Maximum characters in an option's value.
pub const OPTION_VALUE_MAX_LENGTH: usize = 75;

/// Maximum characters in an option's description.
pub const OPTION_DESCRIPTION_MAX_LENGTH: usize = 75;

/// Maximum characters in an option's URL.
pub const OPTION_URL_MAX_LENGTH: usize = 3000;

/// Maximum characters in an option group's label.
pub const OPTION_GROUP_LABEL_MAX_LENGTH: usize = 75;

/// Maximum number of options in an option group.
pub const OPTION_GROUP_MAX_OPTIONS: usize = 100;
