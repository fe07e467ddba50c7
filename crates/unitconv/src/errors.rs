//! Error handling and exit codes.

use unitconv_cli::ui::print_error;
use unitconv_core::{exit_codes, ConvertError};

/// Exit code for a rejected conversion.
#[must_use]
pub fn handle_error(err: &ConvertError) -> i32 {
    match err {
        ConvertError::UnknownCategory(_) | ConvertError::UnknownUnit { .. } => {
            exit_codes::ERROR_INVALID
        }
    }
}

/// Report a failed run and return its exit code.
///
/// Conversion errors were already shown by the presenter; anything else is
/// printed here.
#[must_use]
pub fn report(err: &anyhow::Error) -> i32 {
    if let Some(convert) = err.downcast_ref::<ConvertError>() {
        return handle_error(convert);
    }
    print_error(&format!("{err:#}"));
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::Category;

    #[test]
    fn invalid_conversions_exit_two() {
        assert_eq!(
            handle_error(&ConvertError::UnknownCategory("Volume".into())),
            2
        );
        let err = ConvertError::UnknownUnit {
            unit: "furlongs".into(),
            category: Category::Distance,
        };
        assert_eq!(handle_error(&err), 2);
    }

    #[test]
    fn report_downcasts_convert_error() {
        let err = anyhow::Error::new(ConvertError::UnknownCategory("Volume".into()));
        assert_eq!(report(&err), exit_codes::ERROR_INVALID);
    }

    #[test]
    fn report_other_errors_are_generic() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(report(&err), exit_codes::ERROR_GENERIC);
    }
}
