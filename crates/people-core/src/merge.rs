//! Import-time merge and deduplication.
//!
//! Each incoming contact is matched against the stored contacts. A match
//! fills the stored record's empty attributes from the incoming one and
//! never overwrites a populated attribute. No match means a new contact.
//!
//! Matching, first hit wins:
//!
//! 1. primary e-mail address, case-insensitive, when both sides have one;
//! 2. otherwise first name and last name (case-insensitive) plus the exact
//!    mobile phone number, when all three are set on both sides.
//!
//! The e-mail rule is tried against every candidate before the name/phone
//! rule is tried against any. Contacts added earlier in the same batch are
//! candidates too, so a file that lists one person twice yields one
//! addition.

use tracing::debug;

use crate::models::{is_blank, Contact, DateField, TextField};

/// Which rule tied an incoming contact to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Email,
    NameAndMobile,
}

fn same_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            a.to_lowercase() == b.to_lowercase()
        }
        _ => false,
    }
}

/// Rule 1: both have a primary e-mail and they are equal ignoring case.
pub fn emails_match(a: &Contact, b: &Contact) -> bool {
    same_ignore_case(a.email_address.as_deref(), b.email_address.as_deref())
}

/// Rule 2: first and last name equal ignoring case, mobile phone equal
/// exactly. Only holds when all three are set on both sides.
pub fn name_and_mobile_match(a: &Contact, b: &Contact) -> bool {
    if is_blank(a.mobile_phone.as_deref()) || a.mobile_phone != b.mobile_phone {
        return false;
    }
    same_ignore_case(a.first_name.as_deref(), b.first_name.as_deref())
        && same_ignore_case(a.last_name.as_deref(), b.last_name.as_deref())
}

/// Whether two contacts describe the same person under either rule.
pub fn is_same_person(a: &Contact, b: &Contact) -> bool {
    emails_match(a, b) || name_and_mobile_match(a, b)
}

/// Index of the candidate `incoming` matches, and by which rule.
pub fn find_match<'a, I>(incoming: &Contact, candidates: I) -> Option<(usize, MatchRule)>
where
    I: IntoIterator<Item = &'a Contact>,
    I::IntoIter: Clone,
{
    let mut candidates = candidates.into_iter();
    if let Some(i) = candidates.clone().position(|c| emails_match(incoming, c)) {
        return Some((i, MatchRule::Email));
    }
    candidates
        .position(|c| name_and_mobile_match(incoming, c))
        .map(|i| (i, MatchRule::NameAndMobile))
}

/// Merge `incoming` into a copy of `existing`.
///
/// Every attribute empty on `existing` and set on `incoming` is copied in.
/// Populated attributes and the identifier of `existing` are kept.
pub fn backfill(existing: &Contact, incoming: &Contact) -> Contact {
    let mut merged = existing.clone();
    for field in TextField::ALL {
        let slot = merged.text_mut(*field);
        if is_blank(slot.as_deref()) {
            if let Some(value) = incoming.text(*field).filter(|v| !v.is_empty()) {
                *slot = Some(value.to_string());
            }
        }
    }
    for field in DateField::ALL {
        let slot = merged.date_mut(*field);
        if slot.is_none() {
            *slot = incoming.date(*field);
        }
    }
    merged
}

/// The writes an import would make.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergePlan {
    /// New contacts, without identifiers.
    pub additions: Vec<Contact>,
    /// Stored contacts with backfilled attributes, identifiers kept.
    pub updates: Vec<Contact>,
    /// Incoming contacts that matched a stored or earlier incoming contact.
    pub matched: usize,
    /// Matches that contributed no new attribute.
    pub unchanged: usize,
}

impl MergePlan {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.updates.is_empty()
    }
}

struct Candidate {
    contact: Contact,
    stored: bool,
    changed: bool,
}

/// Reconcile `incoming` against `existing`.
///
/// Several incoming contacts matching one stored contact accumulate into a
/// single update. Incoming identifiers are ignored.
pub fn merge_import(existing: &[Contact], incoming: Vec<Contact>) -> MergePlan {
    let mut pool: Vec<Candidate> = existing
        .iter()
        .map(|c| Candidate {
            contact: c.clone(),
            stored: true,
            changed: false,
        })
        .collect();
    let mut matched = 0;
    let mut unchanged = 0;

    for mut contact in incoming {
        contact.id = None;
        match find_match(&contact, pool.iter().map(|c| &c.contact)) {
            Some((index, rule)) => {
                matched += 1;
                let candidate = &mut pool[index];
                let merged = backfill(&candidate.contact, &contact);
                debug!(
                    id = ?candidate.contact.id,
                    ?rule,
                    name = %contact.display_name(),
                    "incoming contact matched"
                );
                if merged == candidate.contact {
                    unchanged += 1;
                } else {
                    candidate.contact = merged;
                    candidate.changed = true;
                }
            }
            None => pool.push(Candidate {
                contact,
                stored: false,
                changed: false,
            }),
        }
    }

    let mut plan = MergePlan {
        matched,
        unchanged,
        ..Default::default()
    };
    for candidate in pool {
        if !candidate.stored {
            plan.additions.push(candidate.contact);
        } else if candidate.changed {
            plan.updates.push(candidate.contact);
        }
    }
    plan
}
