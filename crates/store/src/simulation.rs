use serde::{Deserialize, Serialize};

/// A user-authored hypothetical trade. Numeric fields are caller-supplied and
/// never validated or recomputed here; the store is a dumb container.
///
/// Field names serialize in camelCase so a slot written by earlier sessions
/// deserializes unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: u64,
    pub company: String,
    pub price_now: f64,
    pub quantity: f64,
    pub buy_price: f64,
    pub value_invested: f64,
    pub break_even: f64,
    pub profit: f64,
    pub min_fee: f64,
    pub commission_rate: f64,
    pub vat_rate: f64,
}

/// A [`Simulation`] before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDraft {
    pub company: String,
    pub price_now: f64,
    pub quantity: f64,
    pub buy_price: f64,
    pub value_invested: f64,
    pub break_even: f64,
    pub profit: f64,
    pub min_fee: f64,
    pub commission_rate: f64,
    pub vat_rate: f64,
}

impl SimulationDraft {
    pub fn with_id(self, id: u64) -> Simulation {
        Simulation {
            id,
            company: self.company,
            price_now: self.price_now,
            quantity: self.quantity,
            buy_price: self.buy_price,
            value_invested: self.value_invested,
            break_even: self.break_even,
            profit: self.profit,
            min_fee: self.min_fee,
            commission_rate: self.commission_rate,
            vat_rate: self.vat_rate,
        }
    }
}
