//! Bounded, ordered collection of internship offers.

use tracing::debug;

use crate::core::compact::remove_first;
use crate::core::error::{PlacementError, Result};
use crate::core::types::{Department, MIN_OFFER_REF, Offer, OfferQuery, OfferRef, StudentId};

/// Offers in insertion order, with a fixed maximum count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferStore {
    offers: Vec<Offer>,
    capacity: usize,
}

impl OfferStore {
    /// Empty store holding at most `capacity` offers. Nothing is reserved up
    /// front; `capacity` is only a limit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            offers: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.offers.len() >= self.capacity
    }

    /// Every offer in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Offer> {
        self.offers.iter()
    }

    pub fn get(&self, reference: OfferRef) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.reference == reference)
    }

    pub(crate) fn get_mut(&mut self, reference: OfferRef) -> Option<&mut Offer> {
        self.offers
            .iter_mut()
            .find(|offer| offer.reference == reference)
    }

    /// Append a record read from storage. Only capacity is enforced; duplicate
    /// references are left for the data check to report.
    pub fn push_loaded(&mut self, offer: Offer) -> Result<()> {
        if self.is_full() {
            return Err(PlacementError::StoreFull {
                capacity: self.capacity,
            });
        }
        self.offers.push(offer);
        Ok(())
    }

    /// Publish a new, empty offer at the end of the store.
    ///
    /// References below `MIN_OFFER_REF` are refused: the offer file reads them
    /// as end-of-data, so every later record would be lost on reload.
    pub fn add(&mut self, reference: OfferRef, department: Department) -> Result<&Offer> {
        if reference < MIN_OFFER_REF {
            return Err(PlacementError::InvalidReference(reference));
        }
        if self.get(reference).is_some() {
            return Err(PlacementError::DuplicateReference(reference));
        }
        self.push_loaded(Offer::new(reference, department))?;
        debug!(reference, department, "offer added");
        let index = self.offers.len() - 1;
        Ok(&self.offers[index])
    }

    /// Delete an offer; later offers move up one position.
    pub fn remove(&mut self, reference: OfferRef) -> Result<Offer> {
        let removed = remove_first(&mut self.offers, |offer| offer.reference == reference)
            .ok_or(PlacementError::NotFound(reference))?;
        debug!(reference, remaining = self.offers.len(), "offer removed");
        Ok(removed)
    }

    /// Linear search. A reference query yields at most one offer.
    pub fn search(&self, query: OfferQuery) -> Vec<&Offer> {
        match query {
            OfferQuery::Reference(reference) => self.get(reference).into_iter().collect(),
            OfferQuery::Department(department) => self
                .offers
                .iter()
                .filter(|offer| offer.department == department)
                .collect(),
        }
    }

    /// Unfilled offers holding one or two candidates.
    ///
    /// Offers with no candidate or with every slot taken are not listed. The
    /// returned iterator can be cloned to walk the listing again.
    pub fn list_open(&self) -> impl Iterator<Item = &Offer> + Clone + '_ {
        self.offers.iter().filter(|offer| {
            !offer.filled && (1..=2).contains(&offer.candidate_count())
        })
    }

    /// Every offer still waiting for an assignment, whatever its candidates.
    pub fn list_unfilled(&self) -> impl Iterator<Item = &Offer> + Clone + '_ {
        self.offers.iter().filter(|offer| !offer.filled)
    }

    pub fn list_filled(&self) -> impl Iterator<Item = &Offer> + Clone + '_ {
        self.offers.iter().filter(|offer| offer.filled)
    }

    pub fn info(&self, reference: OfferRef) -> Result<&Offer> {
        self.get(reference)
            .ok_or(PlacementError::NotFound(reference))
    }

    /// Candidate ids of an offer, in slot order.
    pub fn candidates(&self, reference: OfferRef) -> Result<Vec<StudentId>> {
        Ok(self.info(reference)?.candidates.iter().collect())
    }

    /// Offers on which `student` is a pending candidate.
    pub fn candidacies(&self, student: StudentId) -> impl Iterator<Item = &Offer> + '_ {
        self.offers
            .iter()
            .filter(move |offer| offer.candidates.contains(student))
    }

    /// Remove `student` from every offer except `keep`. Returns the references
    /// the student was withdrawn from.
    pub(crate) fn withdraw_elsewhere(
        &mut self,
        student: StudentId,
        keep: OfferRef,
    ) -> Vec<OfferRef> {
        self.offers
            .iter_mut()
            .filter(|offer| offer.reference != keep)
            .filter_map(|offer| {
                offer
                    .candidates
                    .withdraw(student)
                    .then_some(offer.reference)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{offer, offer_with_candidates, offer_store};

    fn references(store: &OfferStore) -> Vec<OfferRef> {
        store.iter().map(|offer| offer.reference).collect()
    }

    #[test]
    fn add_appends_empty_offer() {
        let mut store = OfferStore::with_capacity(4);
        let added = store.add(1500, 12).expect("add").clone();
        assert_eq!(added, Offer::new(1500, 12));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_duplicate_reference() {
        let mut store = offer_store(4, vec![offer(1500, 12)]);
        let err = store.add(1500, 3).expect_err("duplicate");
        assert_eq!(err, PlacementError::DuplicateReference(1500));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_reference_below_minimum() {
        let mut store = offer_store(4, vec![offer(1500, 12)]);
        let err = store.add(999, 3).expect_err("below minimum");
        assert_eq!(err, PlacementError::InvalidReference(999));
        assert!(store.add(1000, 3).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn huge_capacity_is_only_a_limit() {
        let mut store = OfferStore::with_capacity(usize::MAX / 64);
        assert_eq!(store.capacity(), usize::MAX / 64);
        store.add(1500, 12).expect("add");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_when_full() {
        let mut store = offer_store(1, vec![offer(1500, 12)]);
        let err = store.add(1501, 12).expect_err("full");
        assert_eq!(err, PlacementError::StoreFull { capacity: 1 });
    }

    #[test]
    fn add_then_remove_restores_order() {
        let mut store = offer_store(8, vec![offer(1001, 1), offer(1002, 2), offer(1003, 3)]);
        let before = store.clone();
        store.add(2000, 9).expect("add");
        store.remove(2000).expect("remove");
        assert_eq!(store, before);
    }

    #[test]
    fn remove_shifts_later_offers_forward() {
        let mut store = offer_store(8, vec![offer(1001, 1), offer(1002, 2), offer(1003, 3)]);
        let removed = store.remove(1002).expect("remove");
        assert_eq!(removed.reference, 1002);
        assert_eq!(references(&store), vec![1001, 1003]);
    }

    #[test]
    fn remove_missing_reference_leaves_store_unchanged() {
        let mut store = offer_store(8, vec![offer(1001, 1)]);
        let before = store.clone();
        let err = store.remove(9999).expect_err("missing");
        assert_eq!(err, PlacementError::NotFound(9999));
        assert_eq!(store, before);
    }

    #[test]
    fn search_by_reference_and_department() {
        let store = offer_store(
            8,
            vec![offer(1001, 7), offer(1002, 8), offer(1003, 7)],
        );
        let by_ref = store.search(OfferQuery::Reference(1002));
        assert_eq!(by_ref.len(), 1);
        assert_eq!(by_ref[0].department, 8);

        let by_dept: Vec<OfferRef> = store
            .search(OfferQuery::Department(7))
            .iter()
            .map(|offer| offer.reference)
            .collect();
        assert_eq!(by_dept, vec![1001, 1003]);
        assert!(store.search(OfferQuery::Department(99)).is_empty());
    }

    #[test]
    fn list_open_keeps_only_one_or_two_candidates() {
        let mut filled = offer_with_candidates(1005, 1, &[]);
        filled.filled = true;
        let store = offer_store(
            8,
            vec![
                offer_with_candidates(1001, 1, &[]),
                offer_with_candidates(1002, 1, &[4]),
                offer_with_candidates(1003, 1, &[4, 5]),
                offer_with_candidates(1004, 1, &[4, 5, 6]),
                filled,
            ],
        );
        let open = store.list_open();
        let first: Vec<OfferRef> = open.clone().map(|offer| offer.reference).collect();
        let second: Vec<OfferRef> = open.map(|offer| offer.reference).collect();
        assert_eq!(first, vec![1002, 1003]);
        assert_eq!(first, second);

        let unfilled: Vec<OfferRef> = store.list_unfilled().map(|o| o.reference).collect();
        assert_eq!(unfilled, vec![1001, 1002, 1003, 1004]);
    }

    #[test]
    fn info_and_candidates_report_missing_offer() {
        let store = offer_store(8, vec![offer_with_candidates(1001, 1, &[4, 5])]);
        assert_eq!(store.candidates(1001).expect("candidates"), vec![4, 5]);
        assert_eq!(
            store.info(1234).expect_err("missing"),
            PlacementError::NotFound(1234)
        );
    }

    #[test]
    fn withdraw_elsewhere_skips_kept_offer() {
        let mut store = offer_store(
            8,
            vec![
                offer_with_candidates(1001, 1, &[4, 5, 6]),
                offer_with_candidates(1002, 1, &[4]),
                offer_with_candidates(1003, 1, &[6, 4]),
            ],
        );
        let withdrawn = store.withdraw_elsewhere(4, 1002);
        assert_eq!(withdrawn, vec![1001, 1003]);
        assert_eq!(store.candidates(1001).expect("c"), vec![5, 6]);
        assert_eq!(store.candidates(1002).expect("c"), vec![4]);
        assert_eq!(store.candidates(1003).expect("c"), vec![6]);
    }
}
