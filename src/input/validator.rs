//! Validation of precision/recall input pairs.
//!
//! Checks run fail-fast, cheapest first: element types, then lengths, then
//! the recall ordering. Nothing is sorted, clamped or otherwise repaired.

use num_traits::Float;

use super::{CurveView, SampleArray};
use crate::analysis::PrecisionRecallAnalyzer;
use crate::error::{Error, Result};

/// Validate a precision/recall pair and bind it to an analyzer.
///
/// Fails with:
/// - [`Error::UnsupportedElementType`] if either array is complex
/// - [`Error::ElementTypeMismatch`] if the arrays use different widths
/// - [`Error::LengthMismatch`] if the arrays differ in length
/// - [`Error::NonMonotonicRecall`] if a recall value is smaller than its predecessor
///
/// Empty arrays pass validation.
///
/// # Example
///
/// ```
/// use pr_eval::input::{validate_inputs, CurveView, SampleArray};
///
/// let precisions = SampleArray::from(vec![1.0_f32, 0.5]);
/// let recalls = SampleArray::from(vec![0.5_f32, 1.0]);
/// let view = validate_inputs(&precisions, &recalls)?;
/// assert!(matches!(view, CurveView::Single(_)));
///
/// let unsorted = SampleArray::from(vec![0.7_f32, 0.2]);
/// assert!(validate_inputs(&precisions, &unsorted).is_err());
/// # Ok::<(), pr_eval::Error>(())
/// ```
pub fn validate_inputs<'a>(
    precisions: &'a SampleArray,
    recalls: &'a SampleArray,
) -> Result<CurveView<'a>> {
    let precision_type = precisions.element_type();
    let recall_type = recalls.element_type();

    for element_type in [precision_type, recall_type] {
        if !element_type.is_supported() {
            return Err(Error::UnsupportedElementType(element_type));
        }
    }

    if precision_type != recall_type {
        return Err(Error::ElementTypeMismatch {
            precisions: precision_type,
            recalls: recall_type,
        });
    }

    if precisions.len() != recalls.len() {
        return Err(Error::LengthMismatch {
            precisions: precisions.len(),
            recalls: recalls.len(),
        });
    }

    match (precisions, recalls) {
        (SampleArray::F32(p), SampleArray::F32(r)) => {
            check_recall_order(r)?;
            Ok(CurveView::Single(PrecisionRecallAnalyzer::new(p, r)?))
        }
        (SampleArray::F64(p), SampleArray::F64(r)) => {
            check_recall_order(r)?;
            Ok(CurveView::Double(PrecisionRecallAnalyzer::new(p, r)?))
        }
        _ => Err(Error::ElementTypeMismatch {
            precisions: precision_type,
            recalls: recall_type,
        }),
    }
}

/// Reject recall sequences that decrease anywhere.
fn check_recall_order<T: Float>(recalls: &[T]) -> Result<()> {
    for (i, pair) in recalls.windows(2).enumerate() {
        if pair[0] > pair[1] {
            return Err(Error::NonMonotonicRecall {
                index: i + 1,
                previous: pair[0].to_f64().unwrap_or(f64::NAN),
                current: pair[1].to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ElementType;

    #[test]
    fn test_accepts_double_curve() {
        let p = SampleArray::F64(vec![1.0, 0.8, 0.4]);
        let r = SampleArray::F64(vec![0.1, 0.1, 0.6]);
        let view = validate_inputs(&p, &r).unwrap();
        assert_eq!(view.element_type(), ElementType::Double);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_accepts_empty() {
        let p = SampleArray::F32(Vec::new());
        let r = SampleArray::F32(Vec::new());
        assert!(validate_inputs(&p, &r).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_complex() {
        let p = SampleArray::Complex64(vec![[0.5, 0.1]]);
        let r = SampleArray::F64(vec![0.5]);
        assert!(matches!(
            validate_inputs(&p, &r),
            Err(Error::UnsupportedElementType(ElementType::ComplexDouble))
        ));

        let p = SampleArray::F32(vec![0.5]);
        let r = SampleArray::Complex32(vec![[0.5, 0.0]]);
        assert!(matches!(
            validate_inputs(&p, &r),
            Err(Error::UnsupportedElementType(ElementType::ComplexSingle))
        ));
    }

    #[test]
    fn test_rejects_type_mismatch() {
        let p = SampleArray::F32(vec![0.5]);
        let r = SampleArray::F64(vec![0.5]);
        assert!(matches!(
            validate_inputs(&p, &r),
            Err(Error::ElementTypeMismatch {
                precisions: ElementType::Single,
                recalls: ElementType::Double,
            })
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let p = SampleArray::F64(vec![0.5, 0.4]);
        let r = SampleArray::F64(vec![0.5]);
        assert!(matches!(
            validate_inputs(&p, &r),
            Err(Error::LengthMismatch {
                precisions: 2,
                recalls: 1
            })
        ));
    }

    #[test]
    fn test_rejects_decreasing_recall() {
        let p = SampleArray::F64(vec![0.9, 0.8, 0.7, 0.6]);
        let r = SampleArray::F64(vec![0.1, 0.4, 0.3, 0.5]);
        match validate_inputs(&p, &r) {
            Err(Error::NonMonotonicRecall {
                index,
                previous,
                current,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(previous, 0.4);
                assert_eq!(current, 0.3);
            }
            other => panic!("expected NonMonotonicRecall, got {other:?}"),
        }
    }

    #[test]
    fn test_allows_flat_recall() {
        let p = SampleArray::F32(vec![0.9, 0.8, 0.7]);
        let r = SampleArray::F32(vec![0.5, 0.5, 0.5]);
        assert!(validate_inputs(&p, &r).is_ok());
    }
}
