//! Checkout payment form and simulated gateway.
//!
//! There is no real payment processor behind this: the gateway validates
//! the card fields, waits out a fixed processing delay, and resolves. The
//! delay suspends only the checkout flow that awaits it; session and cart
//! state are untouched, and the charge is neither cancellable nor failable
//! once validation passes.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Default simulated processing delay.
const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Minimum cardholder name length (after trimming).
const MIN_CARDHOLDER_LENGTH: usize = 3;

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("static regex"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("static regex"));
static CVV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("static regex"));

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// User-facing message.
    pub message: &'static str,
}

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// One or more form fields failed validation.
    #[error("payment form validation failed ({} field(s))", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Card details collected by the payment form.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    /// 16 digits, no separators.
    pub card_number: String,
    /// `MM/YY`.
    pub expiry: String,
    /// 3 or 4 digits.
    pub cvv: String,
    /// Name as printed on the card.
    pub cardholder: String,
}

impl PaymentForm {
    /// Validate every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Invalid`] listing each rejected field.
    pub fn validate(&self) -> Result<(), PaymentError> {
        let mut errors = Vec::new();
        if !CARD_NUMBER_RE.is_match(&self.card_number) {
            errors.push(FieldError {
                field: "card_number",
                message: "Please enter a valid 16-digit card number",
            });
        }
        if !EXPIRY_RE.is_match(&self.expiry) {
            errors.push(FieldError {
                field: "expiry",
                message: "Please enter a valid date (MM/YY)",
            });
        }
        if !CVV_RE.is_match(&self.cvv) {
            errors.push(FieldError {
                field: "cvv",
                message: "Please enter a valid CVV",
            });
        }
        if self.cardholder.trim().len() < MIN_CARDHOLDER_LENGTH {
            errors.push(FieldError {
                field: "cardholder",
                message: "Please enter your full name",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::Invalid(errors))
        }
    }
}

/// Keep only digits in a card number input, capped at 16.
#[must_use]
pub fn format_card_number_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(16).collect()
}

/// Normalize an expiry input to `MM/YY` as the user types.
#[must_use]
pub fn format_expiry_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() <= 2 {
        digits
    } else {
        let (month, year) = digits.split_at(2);
        format!("{month}/{year}")
    }
}

/// Result of a successful (simulated) charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Amount charged.
    pub amount: Decimal,
    /// Last four digits of the card, for the confirmation view.
    pub last_four: String,
}

/// The simulated payment gateway.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    delay: Duration,
}

impl Default for PaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway {
    /// Gateway with the standard processing delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: PROCESSING_DELAY,
        }
    }

    /// Gateway with a custom delay (tests use a near-zero one).
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Validate the form, simulate processing, and return a receipt.
    ///
    /// Always resolves once validation passes; the simulated processor
    /// never declines.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Invalid`] when the form fails validation.
    pub async fn charge(
        &self,
        form: &PaymentForm,
        amount: Decimal,
    ) -> Result<PaymentReceipt, PaymentError> {
        form.validate()?;
        tokio::time::sleep(self.delay).await;
        let last_four = form
            .card_number
            .chars()
            .skip(form.card_number.len().saturating_sub(4))
            .collect();
        Ok(PaymentReceipt { amount, last_four })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> PaymentForm {
        PaymentForm {
            card_number: "4242424242424242".to_string(),
            expiry: "09/27".to_string(),
            cvv: "123".to_string(),
            cardholder: "Sarah Connor".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_card_number_must_be_16_digits() {
        let mut form = valid_form();
        form.card_number = "4242 4242 4242 4242".to_string();
        let PaymentError::Invalid(errors) = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "card_number");
    }

    #[test]
    fn test_expiry_month_is_bounded() {
        let mut form = valid_form();
        form.expiry = "13/27".to_string();
        assert!(form.validate().is_err());
        form.expiry = "00/27".to_string();
        assert!(form.validate().is_err());
        form.expiry = "12/27".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_cvv_accepts_three_or_four_digits() {
        let mut form = valid_form();
        form.cvv = "1234".to_string();
        assert!(form.validate().is_ok());
        form.cvv = "12".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_cardholder_whitespace_is_trimmed() {
        let mut form = valid_form();
        form.cardholder = "  ab  ".to_string();
        let PaymentError::Invalid(errors) = form.validate().unwrap_err();
        assert_eq!(errors[0].field, "cardholder");
    }

    #[test]
    fn test_all_failures_are_collected() {
        let form = PaymentForm::default();
        let PaymentError::Invalid(errors) = form.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_format_card_number_input() {
        assert_eq!(
            format_card_number_input("4242 4242 4242 4242 99"),
            "4242424242424242"
        );
    }

    #[test]
    fn test_format_expiry_input() {
        assert_eq!(format_expiry_input("0"), "0");
        assert_eq!(format_expiry_input("09"), "09");
        assert_eq!(format_expiry_input("0927"), "09/27");
        assert_eq!(format_expiry_input("09/27"), "09/27");
    }

    #[tokio::test]
    async fn test_charge_returns_receipt() {
        let gateway = PaymentGateway::with_delay(Duration::from_millis(1));
        let receipt = gateway
            .charge(&valid_form(), Decimal::from(500))
            .await
            .unwrap();
        assert_eq!(receipt.amount, Decimal::from(500));
        assert_eq!(receipt.last_four, "4242");
    }

    #[tokio::test]
    async fn test_charge_rejects_invalid_form_before_delay() {
        let gateway = PaymentGateway::new();
        let err = gateway
            .charge(&PaymentForm::default(), Decimal::from(500))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Invalid(_)));
    }
}
