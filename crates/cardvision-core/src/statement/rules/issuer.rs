//! Issuer classification.
//!
//! Signatures are checked in a fixed order and the first hit wins, even when
//! phrases for several issuers appear in the same text.

use tracing::trace;

use crate::models::statement::Issuer;

/// Lower-case signature phrases per issuer, in evaluation order.
pub const ISSUER_SIGNATURES: [(Issuer, [&str; 2]); 5] = [
    (Issuer::AxisBank, ["axis bank", "axis ace"]),
    (Issuer::HdfcBank, ["hdfc bank", "hdfc regalia"]),
    (Issuer::IciciBank, ["icici bank", "icici card"]),
    (Issuer::SbiCard, ["sbi card", "sbi prime"]),
    (Issuer::IdfcFirstBank, ["idfc first", "idfc bank"]),
];

/// Maps statement text to a known issuer.
pub struct IssuerClassifier;

impl IssuerClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Return the first issuer whose signature occurs in the text.
    pub fn classify(&self, text: &str) -> Issuer {
        let lowered = text.to_lowercase();

        ISSUER_SIGNATURES
            .iter()
            .find_map(|(issuer, phrases)| {
                phrases
                    .iter()
                    .find(|phrase| lowered.contains(*phrase))
                    .map(|phrase| {
                        trace!("issuer: signature '{}' -> {}", phrase, issuer);
                        *issuer
                    })
            })
            .unwrap_or(Issuer::Unknown)
    }
}

impl Default for IssuerClassifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn detect_issuer(text: &str) -> Issuer {
    IssuerClassifier::new().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_issuer_by_brand_and_product() {
        assert_eq!(detect_issuer("Welcome to AXIS BANK"), Issuer::AxisBank);
        assert_eq!(detect_issuer("Your Axis ACE card"), Issuer::AxisBank);
        assert_eq!(detect_issuer("HDFC Regalia statement"), Issuer::HdfcBank);
        assert_eq!(detect_issuer("ICICI Card services"), Issuer::IciciBank);
        assert_eq!(detect_issuer("SBI Prime"), Issuer::SbiCard);
        assert_eq!(detect_issuer("IDFC FIRST Bank Ltd"), Issuer::IdfcFirstBank);
        assert_eq!(detect_issuer("idfc bank"), Issuer::IdfcFirstBank);
    }

    #[test]
    fn test_signature_order_matches_supported_list() {
        let order: Vec<Issuer> = ISSUER_SIGNATURES.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, Issuer::SUPPORTED.to_vec());
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect_issuer("Some Other Bank"), Issuer::Unknown);
        assert_eq!(detect_issuer(""), Issuer::Unknown);
    }
}
