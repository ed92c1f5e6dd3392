//! Offer data file: `reference department filled count [c1 [c2 [c3]]]`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::offers::OfferStore;
use crate::core::types::{Candidates, MAX_CANDIDATES, MIN_OFFER_REF, Offer};
use crate::io::error::PersistError;
use crate::io::scan::Scanner;
use crate::io::write_atomic;

/// Why the offer scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop<'a> {
    EndOfInput,
    Sentinel(i64),
    BadToken(&'a str),
    Malformed,
    StoreFull,
}

/// Parse offer records from `contents` into `store`.
///
/// Scanning stops at the first reference below `MIN_OFFER_REF`, at the first
/// incomplete or malformed record, or once the store is full. Records parsed
/// before that point are kept. Returns the number of records added.
pub fn parse_offers(contents: &str, store: &mut OfferStore) -> usize {
    let (loaded, stop) = scan_offers(contents, store);
    match stop {
        Stop::EndOfInput => {}
        Stop::Sentinel(reference) => {
            debug!(reference, loaded, "offer scan ended at sentinel reference");
        }
        Stop::BadToken(token) => {
            warn!(token, loaded, "offer scan ended at a non-numeric reference");
        }
        Stop::Malformed => warn!(loaded, "offer scan ended at an incomplete record"),
        Stop::StoreFull => warn!(
            capacity = store.capacity(),
            "offer store full, ignoring remaining records"
        ),
    }
    loaded
}

fn scan_offers<'a>(contents: &'a str, store: &mut OfferStore) -> (usize, Stop<'a>) {
    let mut scanner = Scanner::new(contents);
    let mut loaded = 0;
    loop {
        match next_offer(&mut scanner) {
            Ok(offer) => {
                if store.push_loaded(offer).is_err() {
                    return (loaded, Stop::StoreFull);
                }
                loaded += 1;
            }
            Err(stop) => return (loaded, stop),
        }
    }
}

fn next_offer<'a>(scanner: &mut Scanner<'a>) -> Result<Offer, Stop<'a>> {
    let Some(reference) = scanner.read::<i64>() else {
        return Err(scanner.bad_token().map_or(Stop::EndOfInput, Stop::BadToken));
    };
    if reference < i64::from(MIN_OFFER_REF) {
        return Err(Stop::Sentinel(reference));
    }
    let reference = u32::try_from(reference).map_err(|_| Stop::Malformed)?;
    let department = scanner.read::<u32>().ok_or(Stop::Malformed)?;
    let filled = scanner.read::<i64>().ok_or(Stop::Malformed)?;
    let count = scanner.read::<usize>().ok_or(Stop::Malformed)?;
    if count > MAX_CANDIDATES {
        return Err(Stop::Malformed);
    }
    let ids = scanner.read_n::<u32>(count).ok_or(Stop::Malformed)?;

    Ok(Offer {
        reference,
        department,
        filled: filled != 0,
        candidates: Candidates::from_ids(ids),
    })
}

/// Read the offer file at `path` into `store`.
pub fn load_offers(path: &Path, store: &mut OfferStore) -> Result<usize, PersistError> {
    debug!(path = %path.display(), "loading offers");
    let contents = fs::read_to_string(path).map_err(|source| PersistError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_offers(&contents, store);
    debug!(loaded, "offers loaded");
    Ok(loaded)
}

/// Serialize offers, one record per line. Candidate ids are only written for
/// unfilled offers; the count always matches the ids that follow it.
pub fn render_offers(store: &OfferStore) -> String {
    let mut buf = String::new();
    for offer in store.iter() {
        buf.push_str(&format!(
            "{} {} {}",
            offer.reference,
            offer.department,
            u8::from(offer.filled)
        ));
        if offer.filled {
            buf.push_str(" 0");
        } else {
            buf.push_str(&format!(" {}", offer.candidate_count()));
            for id in offer.candidates.iter() {
                buf.push_str(&format!(" {}", id));
            }
        }
        buf.push('\n');
    }
    buf
}

/// Overwrite the offer file at `path` with the current store.
pub fn write_offers(path: &Path, store: &OfferStore) -> Result<(), PersistError> {
    debug!(path = %path.display(), offers = store.len(), "writing offers");
    write_atomic(path, &render_offers(store)).map_err(|source| PersistError::Save {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::OfferRef;
    use crate::test_support::{offer, offer_store, offer_with_candidates};

    fn parse(contents: &str, capacity: usize) -> (usize, OfferStore) {
        let mut store = OfferStore::with_capacity(capacity);
        let loaded = parse_offers(contents, &mut store);
        (loaded, store)
    }

    #[test]
    fn parses_records_with_variable_candidates() {
        let (loaded, store) = parse(
            "1500 12 0 0\n1501 3 0 2 41 42\n1502 3 0 3 41 43 44\n1503 4 1 0\n",
            10,
        );
        assert_eq!(loaded, 4);
        assert_eq!(store.info(1500).expect("1500"), &offer(1500, 12));
        assert_eq!(
            store.info(1501).expect("1501").candidates.slots(),
            [Some(41), Some(42), None]
        );
        assert_eq!(store.info(1502).expect("1502").candidate_count(), 3);
        assert!(store.info(1503).expect("1503").filled);
    }

    #[test]
    fn sentinel_reference_ends_the_scan() {
        let (loaded, store) = parse("1500 12 0 0\n999 1 0 0\n1600 1 0 0\n", 10);
        assert_eq!(loaded, 1);
        assert!(store.get(1600).is_none());
    }

    #[test]
    fn incomplete_record_is_rejected_and_prior_records_kept() {
        let (loaded, store) = parse("1500 12 0 0\n1501 3 0 2 41\n", 10);
        assert_eq!(loaded, 1);
        assert!(store.get(1501).is_none());

        let (loaded, _) = parse("1500 12 0", 10);
        assert_eq!(loaded, 0);
    }

    #[test]
    fn non_numeric_reference_is_told_apart_from_end_of_input() {
        let mut store = OfferStore::with_capacity(10);
        let (loaded, stop) = scan_offers("1500 12 0 0\nx1501 3 0 0\n1600 1 0 0\n", &mut store);
        assert_eq!(loaded, 1);
        assert_eq!(stop, Stop::BadToken("x1501"));

        let mut store = OfferStore::with_capacity(10);
        assert_eq!(scan_offers("1500 12 0 0\n", &mut store), (1, Stop::EndOfInput));
    }

    #[test]
    fn candidate_count_above_three_is_malformed() {
        let (loaded, _) = parse("1500 12 0 4 1 2 3 4\n", 10);
        assert_eq!(loaded, 0);
    }

    #[test]
    fn capacity_stops_quietly() {
        let (loaded, store) = parse("1001 1 0 0\n1002 1 0 0\n1003 1 0 0\n", 2);
        assert_eq!(loaded, 2);
        let refs: Vec<OfferRef> = store.iter().map(|o| o.reference).collect();
        assert_eq!(refs, vec![1001, 1002]);
    }

    #[test]
    fn render_omits_candidates_of_filled_offers() {
        let mut filled = offer_with_candidates(1600, 2, &[9]);
        filled.filled = true;
        let store = offer_store(
            4,
            vec![offer_with_candidates(1500, 12, &[42, 43]), filled],
        );
        assert_eq!(render_offers(&store), "1500 12 0 2 42 43\n1600 2 1 0\n");
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("DATA").join("offrestage.txt");
        let mut filled = offer_with_candidates(1600, 2, &[9]);
        filled.filled = true;
        let store = offer_store(
            4,
            vec![
                offer(1400, 1),
                offer_with_candidates(1500, 12, &[42, 43]),
                filled,
            ],
        );

        write_offers(&path, &store).expect("write");
        let mut loaded = OfferStore::with_capacity(4);
        assert_eq!(load_offers(&path, &mut loaded).expect("load"), 3);

        let mut expected = store.clone();
        let fill_again = expected.get_mut(1600).expect("1600");
        fill_again.fill();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = OfferStore::with_capacity(4);
        let err = load_offers(&temp.path().join("absent.txt"), &mut store).expect_err("missing");
        assert!(matches!(err, PersistError::Load { .. }));
    }
}
