use crate::models::{DailyChange, Sector, SectorIndicator};
use std::collections::BTreeMap;

/// Weighted average change over the basket members present in `changes`
///
/// Computed as `Σ(change·weight) / Σweight` over the members present, so
/// missing members renormalize away. A single contributor reports exactly its
/// own change. When no member has data the value is `None`, never 0.0.
pub fn sector_indicator(
    weights: &'static [(&'static str, f64)],
    changes: &BTreeMap<String, DailyChange>,
) -> SectorIndicator {
    let present: Vec<(&'static str, f64, f64)> = weights
        .iter()
        .filter_map(|(ticker, weight)| {
            changes
                .get(*ticker)
                .map(|change| (*ticker, *weight, change.change_percent))
        })
        .collect();

    let total_weight: f64 = present.iter().map(|(_, weight, _)| weight).sum();
    if total_weight == 0.0 {
        return SectorIndicator::empty();
    }

    let value = match present.as_slice() {
        [(_, _, change)] => *change,
        _ => present.iter().map(|(_, weight, change)| change * weight).sum::<f64>() / total_weight,
    };

    SectorIndicator {
        value: Some(value),
        contributors: present.into_iter().map(|(ticker, _, _)| ticker).collect(),
    }
}

/// Indicator for one of the fixed sector baskets
pub fn indicator_for(sector: Sector, changes: &BTreeMap<String, DailyChange>) -> SectorIndicator {
    sector_indicator(sector.weights(), changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BANKING_WEIGHTS, SECURITIES_WEIGHTS};

    fn change(percent: f64) -> DailyChange {
        DailyChange {
            previous_close: 100.0,
            target_close: 100.0 + percent,
            target_low: 100.0 + percent,
            change_percent: percent,
            intraday_drop_percent: percent,
            volume: 0,
        }
    }

    fn changes(entries: &[(&str, f64)]) -> BTreeMap<String, DailyChange> {
        entries.iter().map(|(t, c)| (t.to_string(), change(*c))).collect()
    }

    #[test]
    fn test_full_basket_weighted_average() {
        let data = changes(&[("VCB", -1.0), ("BID", -2.0), ("TCB", -3.0), ("CTG", -4.0), ("VPB", -5.0)]);
        let indicator = sector_indicator(BANKING_WEIGHTS, &data);

        // .35*-1 + .25*-2 + .20*-3 + .15*-4 + .05*-5
        let expected = -0.35 - 0.50 - 0.60 - 0.60 - 0.25;
        assert!((indicator.value.unwrap() - expected).abs() < 1e-9);
        assert_eq!(indicator.contributors, vec!["VCB", "BID", "TCB", "CTG", "VPB"]);
    }

    #[test]
    fn test_single_contributor_reports_its_change_exactly() {
        for (ticker, c) in [("VPB", -3.7), ("VCB", 1.234567), ("CTG", -0.1)] {
            let indicator = sector_indicator(BANKING_WEIGHTS, &changes(&[(ticker, c)]));
            assert_eq!(indicator.value, Some(c));
            assert_eq!(indicator.contributors, vec![ticker]);
        }
    }

    #[test]
    fn test_missing_members_renormalize() {
        // SSI .40 and SHS .10 present: (0.4*-5 + 0.1*-10) / 0.5 = -6
        let data = changes(&[("SSI", -5.0), ("SHS", -10.0), ("VCB", 7.0)]);
        let indicator = sector_indicator(SECURITIES_WEIGHTS, &data);

        assert!((indicator.value.unwrap() - (-6.0)).abs() < 1e-9);
        assert_eq!(indicator.contributors, vec!["SSI", "SHS"]);
    }

    #[test]
    fn test_weighted_sum_divided_by_present_weight() {
        let data = changes(&[("VIC", -6.3), ("VHM", -4.1), ("NVL", 2.7)]);
        let indicator = sector_indicator(crate::constants::REAL_ESTATE_WEIGHTS, &data);

        let expected = (-6.3 * 0.45 + -4.1 * 0.35 + 2.7 * 0.05) / (0.45 + 0.35 + 0.05);
        assert_eq!(indicator.value, Some(expected));
    }

    #[test]
    fn test_no_members_is_none_not_zero() {
        let indicator = indicator_for(Sector::RealEstate, &changes(&[("VCB", -1.0)]));
        assert_eq!(indicator.value, None);
        assert!(indicator.contributors.is_empty());
    }

    #[test]
    fn test_flat_day_is_zero() {
        let indicator = indicator_for(Sector::Banking, &changes(&[("VCB", 0.0), ("BID", 0.0)]));
        assert_eq!(indicator.value, Some(0.0));
    }
}
