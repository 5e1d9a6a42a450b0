use strum::{Display, EnumString, VariantArray};

/// Service catalogue offered on the quote form.
///
/// `FromStr` accepts the wire slugs sent by the form select; `Display`
/// renders the human label used in emails and on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, VariantArray)]
pub enum ServiceType {
    #[default]
    #[strum(serialize = "warehousing", to_string = "Warehousing")]
    Warehousing,
    #[strum(serialize = "distribution", to_string = "Distribution")]
    Distribution,
    #[strum(serialize = "supply-chain", to_string = "Supply Chain Management")]
    SupplyChain,
    #[strum(serialize = "transportation", to_string = "Transportation")]
    Transportation,
}

impl ServiceType {
    /// Wire value matching the form select options.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceType::Warehousing => "warehousing",
            ServiceType::Distribution => "distribution",
            ServiceType::SupplyChain => "supply-chain",
            ServiceType::Transportation => "transportation",
        }
    }
}
