//! In-memory seed data. There is no real data source; sessions start from
//! a randomly generated directory.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{
    ContactInfo, ImpactMetrics, Stakeholder, StakeholderKind, mint_stakeholder_id,
};

const NAMES: [&str; 12] = [
    "Alex Johnson",
    "Sarah Chen",
    "Michael Brown",
    "Emma Davis",
    "James Wilson",
    "Lisa Garcia",
    "David Miller",
    "Anna Martinez",
    "Robert Taylor",
    "Maria Rodriguez",
    "John Anderson",
    "Jennifer Lee",
];

const INTERESTS: [&str; 8] = [
    "AI/Machine Learning",
    "Sustainability",
    "FinTech",
    "HealthTech",
    "EdTech",
    "Climate Change",
    "Social Impact",
    "Blockchain",
];

const INITIATIVES: [&str; 3] = [
    "Working on innovative solutions",
    "Building partnerships globally",
    "Scaling operations",
];

fn organizations(kind: StakeholderKind) -> &'static [&'static str] {
    match kind {
        StakeholderKind::Entrepreneur => &[
            "TechStart Inc",
            "InnovateCorp",
            "NextGen Solutions",
            "FutureBuilders",
        ],
        StakeholderKind::University => &[
            "MIT",
            "Stanford University",
            "Oxford University",
            "ETH Zurich",
        ],
        StakeholderKind::Investor => &[
            "Venture Capital Partners",
            "Angel Investments",
            "Growth Fund LLC",
        ],
        StakeholderKind::Government => &[
            "Department of Innovation",
            "Economic Development Agency",
        ],
        StakeholderKind::Corporate => &["Google", "Microsoft", "Apple", "Amazon", "Tesla"],
    }
}

struct SeedRegion {
    name: &'static str,
    // (longitude, latitude) of well-known cities in the region.
    cities: &'static [[f64; 2]],
}

const REGIONS: [SeedRegion; 6] = [
    SeedRegion {
        name: "North America",
        cities: &[
            [-74.0060, 40.7128],   // New York
            [-118.2437, 34.0522],  // Los Angeles
            [-87.6298, 41.8781],   // Chicago
            [-79.3832, 43.6532],   // Toronto
            [-122.4194, 37.7749],  // San Francisco
            [-71.0588, 42.3601],   // Boston
            [-122.3321, 47.6062],  // Seattle
            [-123.1207, 49.2827],  // Vancouver
            [-96.7969, 32.7767],   // Dallas
            [-104.9903, 39.7392],  // Denver
            [-84.3880, 33.7490],   // Atlanta
            [-80.1918, 25.7617],   // Miami
            [-73.5673, 45.5017],   // Montreal
            [-112.0740, 33.4484],  // Phoenix
            [-97.7431, 30.2672],   // Austin
        ],
    },
    SeedRegion {
        name: "Europe",
        cities: &[
            [-0.1278, 51.5074],  // London
            [2.3522, 48.8566],   // Paris
            [13.4050, 52.5200],  // Berlin
            [-3.7038, 40.4168],  // Madrid
            [12.4964, 41.9028],  // Rome
            [4.9041, 52.3676],   // Amsterdam
            [8.5417, 47.3769],   // Zurich
            [18.0686, 59.3293],  // Stockholm
            [16.3738, 48.2082],  // Vienna
            [2.1734, 41.3851],   // Barcelona
            [11.5820, 48.1351],  // Munich
            [12.5683, 55.6761],  // Copenhagen
            [-6.2603, 53.3498],  // Dublin
            [4.3517, 50.8503],   // Brussels
            [14.4378, 50.0755],  // Prague
        ],
    },
    SeedRegion {
        name: "Asia",
        cities: &[
            [139.6917, 35.6895],  // Tokyo
            [121.4737, 31.2304],  // Shanghai
            [116.4074, 39.9042],  // Beijing
            [72.8777, 19.0760],   // Mumbai
            [77.1025, 28.7041],   // Delhi
            [126.9780, 37.5665],  // Seoul
            [103.8198, 1.3521],   // Singapore
            [114.1694, 22.3193],  // Hong Kong
            [100.5018, 13.7563],  // Bangkok
            [106.8650, -6.2088],  // Jakarta
            [101.6869, 3.1390],   // Kuala Lumpur
            [120.9842, 14.5995],  // Manila
            [77.5946, 12.9716],   // Bangalore
            [34.7818, 32.0853],   // Tel Aviv
            [55.2708, 25.2048],   // Dubai
        ],
    },
    SeedRegion {
        name: "Africa",
        cities: &[
            [31.2357, 30.0444],   // Cairo
            [3.3792, 6.5244],     // Lagos
            [28.0473, -26.2041],  // Johannesburg
            [36.8219, -1.2921],   // Nairobi
            [18.4241, -33.9249],  // Cape Town
            [-7.5898, 33.5731],   // Casablanca
            [38.7469, 9.1450],    // Addis Ababa
            [-0.1870, 5.6037],    // Accra
            [10.1815, 36.8065],   // Tunis
            [-17.4441, 14.6928],  // Dakar
            [32.5599, 15.5007],   // Khartoum
            [32.5825, 0.3476],    // Kampala
            [39.2083, -6.7924],   // Dar es Salaam
            [-4.0435, 5.3600],    // Abidjan
            [3.0588, 36.7538],    // Algiers
        ],
    },
    SeedRegion {
        name: "South America",
        cities: &[
            [-46.6333, -23.5505],  // São Paulo
            [-58.3816, -34.6037],  // Buenos Aires
            [-43.1729, -22.9068],  // Rio de Janeiro
            [-77.0428, -12.0464],  // Lima
            [-74.0721, 4.7110],    // Bogotá
            [-70.6693, -33.4489],  // Santiago
            [-66.9036, 10.4806],   // Caracas
            [-56.1645, -34.9011],  // Montevideo
            [-78.4678, -0.1807],   // Quito
            [-68.1193, -16.4897],  // La Paz
            [-47.8825, -15.7975],  // Brasília
            [-75.5812, 6.2442],    // Medellín
            [-34.8813, -8.0476],   // Recife
            [-38.5434, -3.7319],   // Fortaleza
            [-49.2731, -25.4284],  // Curitiba
        ],
    },
    SeedRegion {
        name: "Australia/Oceania",
        cities: &[
            [151.2093, -33.8688],  // Sydney
            [144.9631, -37.8136],  // Melbourne
            [153.0251, -27.4698],  // Brisbane
            [115.8605, -31.9505],  // Perth
            [174.7633, -36.8485],  // Auckland
            [138.6007, -34.9285],  // Adelaide
            [174.7762, -41.2865],  // Wellington
            [149.1300, -35.2809],  // Canberra
            [153.4000, -28.0167],  // Gold Coast
            [172.6362, -43.5321],  // Christchurch
            [130.8456, -12.4634],  // Darwin
            [147.3257, -42.8821],  // Hobart
            [178.4419, -18.1248],  // Suva
            [147.1925, -9.4438],   // Port Moresby
            [166.4572, -22.2758],  // Noumea
        ],
    },
];

/// Generates `count` stakeholder records with a thread-local rng.
pub fn seed_stakeholders(count: usize) -> Vec<Stakeholder> {
    seed_with(&mut rand::rng(), count)
}

/// Generates `count` stakeholder records from the supplied rng.
///
/// Connections are populated after all records exist: 1–5 references to
/// other records, never to the record itself.
pub fn seed_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Stakeholder> {
    let mut out: Vec<Stakeholder> = Vec::with_capacity(count);

    for _ in 0..count {
        let kind = StakeholderKind::ALL[rng.random_range(0..StakeholderKind::ALL.len())];
        let region = &REGIONS[rng.random_range(0..REGIONS.len())];
        let coordinates = region.cities[rng.random_range(0..region.cities.len())];

        let mut interests = BTreeSet::new();
        for _ in 0..3 {
            interests.insert(pick(rng, &INTERESTS).to_string());
        }

        let email_name = pick(rng, &NAMES).to_lowercase().replace(' ', ".");
        let linkedin_name = pick(rng, &NAMES).to_lowercase().replace(' ', "-");

        out.push(Stakeholder {
            id: mint_stakeholder_id(),
            kind,
            name: pick(rng, &NAMES).to_string(),
            organization: pick(rng, organizations(kind)).to_string(),
            region: region.name.to_string(),
            coordinates,
            impact_metrics: metrics_for(rng, kind),
            interests,
            current_initiatives: INITIATIVES.iter().map(|s| s.to_string()).collect(),
            connections: Vec::new(),
            description: format!(
                "Experienced {kind} focused on driving innovation and creating \
                 positive impact through technology and collaboration."
            ),
            contact_info: ContactInfo {
                email: Some(format!("{email_name}@example.com")),
                linkedin: Some(format!("linkedin.com/in/{linkedin_name}")),
                website: None,
            },
        });
    }

    let ids: Vec<String> = out.iter().map(|s| s.id.clone()).collect();
    for (i, stakeholder) in out.iter_mut().enumerate() {
        let mut others: Vec<usize> = (0..ids.len()).filter(|&j| j != i).collect();
        others.shuffle(rng);
        let connection_count = rng.random_range(1..=5usize);
        stakeholder.connections = others
            .into_iter()
            .take(connection_count)
            .map(|j| ids[j].clone())
            .collect();
    }

    out
}

fn metrics_for<R: Rng + ?Sized>(rng: &mut R, kind: StakeholderKind) -> ImpactMetrics {
    use StakeholderKind::*;

    ImpactMetrics {
        funding: matches!(kind, Entrepreneur | Investor)
            .then(|| rng.random_range(0..10_000_000u64)),
        employees: matches!(kind, Entrepreneur | Corporate).then(|| rng.random_range(0..1_000u64)),
        students_reached: matches!(kind, University).then(|| rng.random_range(0..50_000u64)),
        projects_completed: Some(rng.random_range(0..50u64)),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::{REGIONS, seed_with};
    use crate::model::StakeholderKind;
    use crate::query::{find_by_id, resolve_connections};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeds_the_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(seed_with(&mut rng, 25).len(), 25);
        assert!(seed_with(&mut rng, 0).is_empty());
    }

    #[test]
    fn coordinates_are_in_valid_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for s in seed_with(&mut rng, 60) {
            let [lon, lat] = s.coordinates;
            assert!((-180.0..=180.0).contains(&lon), "lon out of range: {lon}");
            assert!((-90.0..=90.0).contains(&lat), "lat out of range: {lat}");
            assert!(REGIONS.iter().any(|r| r.name == s.region));
        }
    }

    #[test]
    fn connections_reference_other_records() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = seed_with(&mut rng, 30);
        for s in &data {
            assert!((1..=5).contains(&s.connections.len()));
            assert!(!s.connections.contains(&s.id));
            assert_eq!(resolve_connections(s, &data).len(), s.connections.len());
            for id in &s.connections {
                assert!(find_by_id(&data, id).is_some());
            }
        }
    }

    #[test]
    fn a_single_record_has_no_one_to_connect_to() {
        let mut rng = StdRng::seed_from_u64(5);
        let data = seed_with(&mut rng, 1);
        assert!(data[0].connections.is_empty());
    }

    #[test]
    fn metrics_follow_the_kind() {
        let mut rng = StdRng::seed_from_u64(13);
        for s in seed_with(&mut rng, 80) {
            let m = &s.impact_metrics;
            assert!(m.projects_completed.is_some());
            match s.kind {
                StakeholderKind::University => {
                    assert!(m.students_reached.is_some());
                    assert!(m.funding.is_none());
                }
                StakeholderKind::Government => {
                    assert!(m.funding.is_none());
                    assert!(m.employees.is_none());
                    assert!(m.students_reached.is_none());
                }
                StakeholderKind::Entrepreneur => {
                    assert!(m.funding.is_some());
                    assert!(m.employees.is_some());
                }
                StakeholderKind::Investor => assert!(m.funding.is_some()),
                StakeholderKind::Corporate => assert!(m.employees.is_some()),
            }
            assert!(!s.interests.is_empty() && s.interests.len() <= 3);
        }
    }
}
