//! Built-in demo spots around Gulberg, Lahore (prices in PKR)

use crate::domain::spot::{Coordinate, SpotRecord, SpotType};

#[allow(clippy::too_many_arguments)]
fn spot(
    id: u32,
    name: &str,
    subtitle: &str,
    distance: &str,
    rating: f32,
    price: u32,
    (available, total): (u32, u32),
    spot_type: SpotType,
    features: &[&str],
    (latitude, longitude): (f64, f64),
    slot_number: &str,
) -> SpotRecord {
    SpotRecord {
        id,
        name: name.to_string(),
        subtitle: subtitle.to_string(),
        distance: distance.to_string(),
        rating,
        price,
        available,
        total,
        spot_type,
        features: features.iter().map(|f| f.to_string()).collect(),
        coordinate: Coordinate {
            latitude,
            longitude,
        },
        slot_number: slot_number.to_string(),
    }
}

pub fn demo_spots() -> Vec<SpotRecord> {
    vec![
        spot(
            1,
            "Gulberg Galleria Parking",
            "Main Boulevard, Gulberg III",
            "0.4 km",
            4.6,
            100,
            (5, 12),
            SpotType::Covered,
            &["CCTV", "EV Charging", "24/7"],
            (31.5161, 74.3515),
            "A-12",
        ),
        spot(
            2,
            "Liberty Market Lot",
            "Liberty Roundabout",
            "0.9 km",
            4.1,
            60,
            (14, 20),
            SpotType::Open,
            &["Attendant"],
            (31.5104, 74.3446),
            "L-07",
        ),
        spot(
            3,
            "MM Alam Road Plaza",
            "MM Alam Road, Gulberg II",
            "1.2 km",
            4.8,
            150,
            (2, 10),
            SpotType::Covered,
            &["Valet", "EV Charging", "CCTV"],
            (31.5130, 74.3502),
            "P-03",
        ),
        spot(
            4,
            "Packages Mall Basement",
            "Walton Road",
            "3.5 km",
            4.7,
            120,
            (18, 20),
            SpotType::Covered,
            &["CCTV", "EV Charging", "Wheelchair Access"],
            (31.4714, 74.3563),
            "B2-15",
        ),
        spot(
            5,
            "Model Town Park Lot",
            "Model Town Link Road",
            "2.8 km",
            3.9,
            40,
            (7, 16),
            SpotType::Open,
            &["Attendant"],
            (31.4834, 74.3220),
            "M-04",
        ),
        spot(
            6,
            "Emporium Mall Level 1",
            "Johar Town",
            "6.1 km",
            4.5,
            80,
            (3, 18),
            SpotType::Covered,
            &["CCTV", "24/7"],
            (31.4676, 74.2656),
            "E-09",
        ),
    ]
}
