//! Battery gauge drivers
//!
//! All gauge drivers share one error type. Whatever goes wrong, the outcome
//! of an operation falls into exactly one [`ResultKind`].

pub mod ltc2943;

/// Coarse outcome of a gauge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResultKind {
    /// Operation fully completed, any output is valid
    Ok,
    /// Bus not ready, a bus transaction failed, or the requested value is
    /// outside the device's range
    Failed,
    /// Caller passed an empty or oversize buffer
    InvalidArgument,
}

impl ResultKind {
    /// Classify the outcome of a gauge operation
    pub fn of<T, E>(result: &Result<T, GaugeError<E>>) -> Self {
        match result {
            Ok(_) => ResultKind::Ok,
            Err(e) => e.kind(),
        }
    }
}

/// Errors from gauge operations
///
/// `E` is the transport error of the underlying [`coulomb_hal::I2cBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GaugeError<E> {
    /// Bus reported not ready; nothing was sent
    NotReady,
    /// A bus transaction failed
    Bus(E),
    /// Requested ADC mode cannot be written (`Undefined`)
    InvalidMode,
    /// Empty read buffer, or empty/oversize write payload
    InvalidArgument,
}

impl<E> GaugeError<E> {
    /// Map onto the coarse result taxonomy
    pub fn kind(&self) -> ResultKind {
        match self {
            GaugeError::NotReady | GaugeError::Bus(_) | GaugeError::InvalidMode => {
                ResultKind::Failed
            }
            GaugeError::InvalidArgument => ResultKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(GaugeError::<()>::NotReady.kind(), ResultKind::Failed);
        assert_eq!(GaugeError::Bus(()).kind(), ResultKind::Failed);
        assert_eq!(GaugeError::<()>::InvalidMode.kind(), ResultKind::Failed);
        assert_eq!(
            GaugeError::<()>::InvalidArgument.kind(),
            ResultKind::InvalidArgument
        );
    }

    #[test]
    fn test_result_kind_of() {
        let ok: Result<u8, GaugeError<()>> = Ok(3);
        let failed: Result<u8, GaugeError<()>> = Err(GaugeError::Bus(()));
        let invalid: Result<u8, GaugeError<()>> = Err(GaugeError::InvalidArgument);

        assert_eq!(ResultKind::of(&ok), ResultKind::Ok);
        assert_eq!(ResultKind::of(&failed), ResultKind::Failed);
        assert_eq!(ResultKind::of(&invalid), ResultKind::InvalidArgument);
    }
}
