use tracing::warn;

use dx_model::{ChoroplethFill, RegionCounts, RegionShade};
use dx_normalization::RegionAliases;

/// Colours each map feature by its region's count.
///
/// Feature names go through the alias table before the count lookup;
/// features without a count are shaded as zero. When every count is the
/// same, the scale starts at zero so the fill still reads as a quantity.
pub fn shade_regions<'a, I>(
    features: I,
    counts: &RegionCounts,
    aliases: &RegionAliases,
) -> ChoroplethFill
where
    I: IntoIterator<Item = &'a str>,
{
    let mut unmatched = 0usize;
    let shades: Vec<RegionShade> = features
        .into_iter()
        .map(|feature| {
            let region = aliases.canonical(feature);
            let count = counts.get(&region).copied().unwrap_or_else(|| {
                unmatched += 1;
                0
            });
            RegionShade {
                feature: feature.to_string(),
                region,
                count,
            }
        })
        .collect();
    if unmatched > 0 {
        warn!(unmatched, features = shades.len(), "map features without region data");
    }

    let min = shades.iter().map(|shade| shade.count).min().unwrap_or(0);
    let max = shades.iter().map(|shade| shade.count).max().unwrap_or(0);
    ChoroplethFill {
        min: if min == max { 0 } else { min },
        max,
        shades,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> RegionCounts {
        pairs
            .iter()
            .map(|(region, count)| ((*region).to_string(), *count))
            .collect()
    }

    #[test]
    fn eastern_feature_reads_east_of_england() {
        let fill = shade_regions(
            ["Eastern", "Wales"],
            &counts(&[("east of england", 7), ("wales", 3)]),
            &RegionAliases::default(),
        );
        assert_eq!(fill.shades[0].region, "east of england");
        assert_eq!(fill.shades[0].count, 7);
        assert_eq!((fill.min, fill.max), (3, 7));
    }

    #[test]
    fn flat_counts_start_scale_at_zero() {
        let fill = shade_regions(
            ["Wales", "Scotland"],
            &counts(&[("wales", 4), ("scotland", 4)]),
            &RegionAliases::default(),
        );
        assert_eq!((fill.min, fill.max), (0, 4));
    }

    #[test]
    fn missing_region_shades_as_zero() {
        let fill = shade_regions(["Narnia"], &counts(&[]), &RegionAliases::empty());
        assert_eq!(fill.shades[0].count, 0);
        assert_eq!((fill.min, fill.max), (0, 0));
    }
}
