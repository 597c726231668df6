/// Identification of a use case for menus and logs
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "assign_driver"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_assign_driver"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
