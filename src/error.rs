use thiserror::Error;

/// Composition-time failures that can only be detected at run time.
///
/// Everything the type system can reject (random access on a filtered
/// sequence, a borrowing sequence outliving its storage, shared traversal of
/// a stateful chain) is rejected at compile time instead and never shows up
/// here.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    #[error("`{adaptor}` requires a {required} source")]
    CapabilityMismatch {
        adaptor: &'static str,
        required: &'static str,
    },

    #[error("`{adaptor}`: parameter `{param}` must be positive, got {value}")]
    NonPositive {
        adaptor: &'static str,
        param: &'static str,
        value: usize,
    },
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;

impl SeqError {
    pub fn capability(adaptor: &'static str, required: &'static str) -> Self {
        tracing::debug!(adaptor, required, "capability mismatch");
        SeqError::CapabilityMismatch { adaptor, required }
    }

    pub fn non_positive(adaptor: &'static str, param: &'static str, value: usize) -> Self {
        tracing::debug!(adaptor, param, value, "non-positive parameter");
        SeqError::NonPositive {
            adaptor,
            param,
            value,
        }
    }
}

/// `Ok(value)` if `value > 0`.
pub(crate) fn positive(adaptor: &'static str, param: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(SeqError::non_positive(adaptor, param, value))
    } else {
        Ok(value)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn messages_name_the_adaptor() {
        let e = SeqError::capability("reverse", "bounded");
        assert_eq!(e.to_string(), "`reverse` requires a bounded source");

        let e = SeqError::non_positive("chunk", "size", 0);
        assert_eq!(e.to_string(), "`chunk`: parameter `size` must be positive, got 0");
    }

    #[test]
    fn positive_check() {
        assert_eq!(positive("stride", "step", 3), Ok(3));
        assert_eq!(
            positive("stride", "step", 0),
            Err(SeqError::NonPositive {
                adaptor: "stride",
                param: "step",
                value: 0
            })
        );
    }
}
