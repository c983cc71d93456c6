//! Case counts over the case-detail table.

use std::collections::BTreeSet;

use serde::Serialize;
use tdlc_model::CaseDetail;
use tdlc_transform::text::normalize_case_role;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaseTotals {
    #[serde(rename = "total_causas")]
    pub total_cases: usize,
    #[serde(rename = "con_fallo")]
    pub with_ruling: usize,
}

/// Distinct case roles, and how many of them have a detected ruling.
pub fn case_totals(details: &[CaseDetail]) -> CaseTotals {
    let mut roles = BTreeSet::new();
    let mut ruled = BTreeSet::new();
    for detail in details {
        let role = normalize_case_role(&detail.case_role);
        if role.is_empty() {
            continue;
        }
        if detail.ruling_detected {
            ruled.insert(role.clone());
        }
        roles.insert(role);
    }
    CaseTotals {
        total_cases: roles.len(),
        with_ruling: ruled.len(),
    }
}
