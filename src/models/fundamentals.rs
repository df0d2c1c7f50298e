use serde::{Deserialize, Serialize};

/// Provider-sourced equity ratios, passed through to the scorer untouched.
///
/// Ratios are fractions (`0.25` = 25%); `debt_to_equity` is a plain ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSet {
    pub roce: Option<f64>,
    pub eps_growth: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub forward_pe: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub price_to_book: Option<f64>,
    pub free_cashflow: Option<f64>,
    pub fcf_yield: Option<f64>,
    pub operating_margins: Option<f64>,
    pub debt_to_ebitda: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    pub price_6m_return: Option<f64>,
}

impl FundamentalSet {
    pub fn with_roce(mut self, roce: f64) -> Self {
        self.roce = Some(roce);
        self
    }

    pub fn with_eps_growth(mut self, eps_growth: f64) -> Self {
        self.eps_growth = Some(eps_growth);
        self
    }

    pub fn with_debt_to_equity(mut self, debt_to_equity: f64) -> Self {
        self.debt_to_equity = Some(debt_to_equity);
        self
    }
}
