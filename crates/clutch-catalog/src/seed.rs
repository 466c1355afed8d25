//! Built-in sample catalog written to an empty store on first read.

use chrono::NaiveDate;
use clutch_types::{BikeId, Ratings, Review, SpecKey, Specs, VehicleRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn specs(values: [&str; 7]) -> Specs {
    SpecKey::ALL
        .into_iter()
        .zip(values)
        .fold(Specs::default(), |specs, (key, value)| specs.with(key, value))
}

fn review(user: &str, rating: f64, comment: &str, (y, m, d): (i32, u32, u32)) -> Vec<Review> {
    NaiveDate::from_ymd_opt(y, m, d)
        .map(|date| Review {
            user: user.to_string(),
            rating,
            comment: comment.to_string(),
            date,
        })
        .into_iter()
        .collect()
}

fn placeholder(text: &str) -> String {
    format!("https://placehold.co/600x400?text={text}")
}

/// The four sample records: one each of Sports, Cruiser, Naked and Electric.
pub fn sample_records() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            id: BikeId::numbered(1),
            name: "Yamaha R15 V4".into(),
            brand: "Yamaha".into(),
            category: "Sports".into(),
            price: 185_000.0,
            image: placeholder("Yamaha+R15"),
            gallery: vec![
                placeholder("R15+1"),
                placeholder("R15+2"),
                placeholder("R15+3"),
            ],
            description: "The Yamaha R15 V4 is a popular sports bike known for its aggressive \
                          styling and track-focused performance."
                .into(),
            expert_review: "The R15 V4 continues to be the king of the 150cc sports segment with \
                            razor-sharp handling and premium features. It remains a focused \
                            machine, not one for comfort seekers."
                .into(),
            pros: strings(&["Excellent handling", "Refined engine", "Full digital console"]),
            cons: strings(&["Stiff ride", "Expensive spares", "No dual-channel ABS"]),
            specs: specs([
                "155cc liquid-cooled",
                "155cc",
                "18.4 bhp",
                "14.2 Nm",
                "40 kmpl",
                "11 L",
                "141 kg",
            ]),
            ratings: Ratings::new(4.5, 3.5, 4.0, Some(4.2)),
            reviews: review("Rahul", 4.2, "Great bike for enthusiasts!", (2025, 1, 15)),
        },
        VehicleRecord {
            id: BikeId::numbered(2),
            name: "Royal Enfield Classic 350".into(),
            brand: "Royal Enfield".into(),
            category: "Cruiser".into(),
            price: 200_000.0,
            image: placeholder("Classic+350"),
            gallery: vec![placeholder("Classic+350+1"), placeholder("Classic+350+2")],
            description: "The Classic 350 is a timeless cruiser with modern engineering and \
                          iconic design."
                .into(),
            expert_review: "The new Classic 350 keeps its retro charm while offering a much \
                            smoother engine and better road manners. A great city cruiser and \
                            highway tourer."
                .into(),
            pros: strings(&["Iconic style", "Refined engine", "Comfortable ride"]),
            cons: strings(&["Heavy", "Average braking", "Vibrations at high speed"]),
            specs: specs([
                "349cc air-cooled",
                "349cc",
                "20.2 bhp",
                "27 Nm",
                "35 kmpl",
                "13 L",
                "195 kg",
            ]),
            ratings: Ratings::new(3.8, 4.5, 3.5, Some(4.5)),
            reviews: review("Raj", 4.5, "Lovely thump!", (2025, 2, 10)),
        },
        VehicleRecord {
            id: BikeId::numbered(3),
            name: "KTM 390 Duke".into(),
            brand: "KTM".into(),
            category: "Naked".into(),
            price: 295_000.0,
            image: placeholder("390+Duke"),
            gallery: vec![placeholder("390+Duke+1"), placeholder("390+Duke+2")],
            description: "The 390 Duke is a performance-oriented naked bike with aggressive \
                          styling and razor-sharp dynamics."
                .into(),
            expert_review: "The 390 Duke remains a hooligan machine with incredible value for \
                            performance seekers. The update adds a quickshifter and better \
                            brakes."
                .into(),
            pros: strings(&["Powerful engine", "Lightweight", "Top-notch electronics"]),
            cons: strings(&["Stiff suspension", "Heat dissipation", "Service cost"]),
            specs: specs([
                "373cc liquid-cooled",
                "373cc",
                "43 bhp",
                "37 Nm",
                "25 kmpl",
                "13.4 L",
                "168 kg",
            ]),
            ratings: Ratings::new(4.8, 3.0, 3.0, Some(3.9)),
            reviews: Vec::new(),
        },
        VehicleRecord {
            id: BikeId::numbered(4),
            name: "Ola S1 Pro".into(),
            brand: "Ola Electric".into(),
            category: "Electric".into(),
            price: 140_000.0,
            image: placeholder("Ola+S1+Pro"),
            gallery: vec![placeholder("Ola+S1+Pro+1")],
            description: "India's best-selling electric scooter with impressive range and \
                          features."
                .into(),
            expert_review: "The Ola S1 Pro set new benchmarks for electric scooters with its \
                            performance and tech. Reliability and after-sales support are still \
                            evolving."
                .into(),
            pros: strings(&[
                "Fast acceleration",
                "Large boot",
                "Touchscreen",
                "Low running cost",
            ]),
            cons: strings(&[
                "Build quality issues",
                "Service network",
                "Real-world range lower",
            ]),
            specs: specs([
                "Electric motor",
                "NA",
                "8.5 kW",
                "58 Nm",
                "180 km/charge",
                "Battery 4 kWh",
                "125 kg",
            ]),
            ratings: Ratings::new(4.2, 4.0, 4.5, Some(4.2)),
            reviews: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_distinct_records() {
        let records = sample_records();
        assert_eq!(records.len(), 4);
        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(records[0].id.as_str(), "b1");
        assert_eq!(records[3].id.as_str(), "b4");
    }

    #[test]
    fn one_of_each_category() {
        let categories: Vec<_> = sample_records().into_iter().map(|r| r.category).collect();
        assert_eq!(categories, vec!["Sports", "Cruiser", "Naked", "Electric"]);
    }

    #[test]
    fn prices_positive_and_overall_set() {
        for record in sample_records() {
            assert!(record.price > 0.0, "{}", record.name);
            assert!(record.ratings.overall.is_some(), "{}", record.name);
            assert!(!record.gallery.is_empty(), "{}", record.name);
        }
    }

    #[test]
    fn specs_are_complete() {
        for record in sample_records() {
            for key in SpecKey::ALL {
                assert!(record.specs.get(key).is_some(), "{} {key}", record.name);
            }
        }
    }

    #[test]
    fn reviewed_records_carry_review_mean() {
        for record in sample_records().into_iter().filter(|r| !r.reviews.is_empty()) {
            let mut refreshed = record.clone();
            refreshed.refresh_overall();
            assert_eq!(refreshed, record, "{}", record.name);
        }
    }

    #[test]
    fn at_most_one_review_each() {
        let records = sample_records();
        assert!(records.iter().all(|r| r.reviews.len() <= 1));
        assert_eq!(records[0].reviews[0].user, "Rahul");
    }
}
