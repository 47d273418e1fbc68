use serde::{Deserialize, Serialize};

/// Static reference row of national plastic-waste and recycling figures
///
/// Seeded once on first startup and read-only at runtime; the map and
/// dashboard screens are the only consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryStatRecord {
    pub country: String,
    pub waste_tons: u64,
    pub recycling_rate_pct: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl CountryStatRecord {
    /// Marker color on the global map
    ///
    /// Countries recycling more than half their plastic waste show green.
    pub fn marker_color(&self) -> &'static str {
        if self.recycling_rate_pct > 50 {
            "green"
        } else {
            "red"
        }
    }
}

/// Seed rows written when the statistics table is empty
pub fn seed_rows() -> Vec<CountryStatRecord> {
    let rows = [
        ("India", 3_500_000, 60, 20.5937, 78.9629),
        ("USA", 4_200_000, 35, 37.0902, -95.7129),
        ("Japan", 2_500_000, 78, 36.2048, 138.2529),
        ("Brazil", 1_800_000, 45, -14.235, -51.9253),
        ("Germany", 2_200_000, 66, 51.1657, 10.4515),
    ];

    rows.into_iter()
        .map(
            |(country, waste_tons, recycling_rate_pct, latitude, longitude)| CountryStatRecord {
                country: country.to_string(),
                waste_tons,
                recycling_rate_pct,
                latitude,
                longitude,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_color_threshold() {
        let mut stat = CountryStatRecord {
            country: "Testland".to_string(),
            waste_tons: 1,
            recycling_rate_pct: 51,
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(stat.marker_color(), "green");

        // Exactly half does not qualify
        stat.recycling_rate_pct = 50;
        assert_eq!(stat.marker_color(), "red");

        stat.recycling_rate_pct = 35;
        assert_eq!(stat.marker_color(), "red");
    }

    #[test]
    fn test_seed_rows() {
        let rows = seed_rows();
        assert_eq!(rows.len(), 5);

        let india = rows.iter().find(|r| r.country == "India").unwrap();
        assert_eq!(india.waste_tons, 3_500_000);
        assert_eq!(india.recycling_rate_pct, 60);

        // Two of the five seed countries clear the green threshold alongside India
        let green = rows.iter().filter(|r| r.marker_color() == "green").count();
        assert_eq!(green, 3);
    }
}
