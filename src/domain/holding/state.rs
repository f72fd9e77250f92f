//! Holdings state container — app-owned, SDK-provided update logic.

use super::Holding;
use crate::shared::CoinId;

/// The user's holdings list.
///
/// The app owns instances of this type and persists them through a
/// [`super::HoldingsStore`]. Invariant: at most one entry per coin id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldingsState {
    holdings: Vec<Holding>,
}

impl HoldingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a persisted list. Duplicate ids are merged by
    /// summing amounts, restoring the invariant for lists written by
    /// older or foreign tools.
    pub fn from_list(list: Vec<Holding>) -> Self {
        let mut state = Self::new();
        for h in list {
            state.add(h);
        }
        state
    }

    /// Add a holding. If the id is already present, amounts are merged;
    /// otherwise the holding is appended.
    pub fn add(&mut self, holding: Holding) {
        if let Some(existing) = self.holdings.iter_mut().find(|h| h.id == holding.id) {
            existing.amount += holding.amount;
        } else {
            self.holdings.push(holding);
        }
    }

    /// Remove the holding with the given id, if present.
    pub fn remove(&mut self, id: &CoinId) {
        self.holdings.retain(|h| &h.id != id);
    }

    /// All holdings, including zero-amount entries.
    pub fn all(&self) -> &[Holding] {
        &self.holdings
    }

    /// The displayable set: holdings with a strictly positive amount.
    pub fn non_zero(&self) -> Vec<Holding> {
        self.holdings
            .iter()
            .filter(|h| h.amount > 0.0)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc(amount: f64) -> Holding {
        Holding::new("bitcoin", "BTC", "Bitcoin", amount)
    }

    fn eth(amount: f64) -> Holding {
        Holding::new("ethereum", "ETH", "Ethereum", amount)
    }

    #[test]
    fn test_add_appends_new_id() {
        let mut state = HoldingsState::new();
        state.add(btc(2.0));
        state.add(eth(1.0));
        assert_eq!(state.all().len(), 2);
    }

    #[test]
    fn test_add_merges_duplicate_id() {
        let mut state = HoldingsState::new();
        state.add(btc(2.0));
        state.add(btc(0.5));
        assert_eq!(state.all().len(), 1);
        assert_eq!(state.all()[0].amount, 2.5);
    }

    #[test]
    fn test_remove_drops_by_id() {
        let mut state = HoldingsState::new();
        state.add(btc(2.0));
        state.add(eth(1.0));
        state.remove(&CoinId::from("bitcoin"));
        assert_eq!(state.all().len(), 1);
        assert_eq!(state.all()[0].id.as_str(), "ethereum");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut state = HoldingsState::new();
        state.add(btc(2.0));
        state.remove(&CoinId::from("dogecoin"));
        assert_eq!(state.all().len(), 1);
    }

    #[test]
    fn test_non_zero_filters_empty_amounts() {
        let mut state = HoldingsState::new();
        state.add(btc(2.0));
        state.add(eth(0.0));
        let visible = state.non_zero();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "bitcoin");
    }

    #[test]
    fn test_from_list_merges_duplicates() {
        let state = HoldingsState::from_list(vec![btc(1.0), eth(3.0), btc(2.0)]);
        assert_eq!(state.all().len(), 2);
        assert_eq!(state.all()[0].amount, 3.0);
    }
}
