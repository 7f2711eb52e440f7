use strum::{AsRefStr, EnumIter, EnumString};

/// Privilege class a user record carries. The set is closed; rows holding
/// any other text fail row conversion instead of widening the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Customer,
    Seller,
    Admin,
}
