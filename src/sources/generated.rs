use crate::models::PropertyRecord;
use crate::sources::error::SourceError;
use crate::sources::traits::DataSource;
use crate::sources::types::GeneratorParams;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

const ADJECTIVES: &[&str] = &[
    "Modern", "Cozy", "Spacious", "Luxury", "Sunny", "Quiet", "Elegant", "Charming",
];

const KINDS: &[&str] = &["villa", "apartment", "townhouse", "penthouse"];

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bengaluru", "Pune", "Hyderabad", "Chennai", "Goa", "Jaipur",
];

const FEATURES: &[&str] = &[
    "Private Garden", "City View", "Ocean View", "Swimming Pool", "Gym", "Parking",
    "Balcony", "Fireplace",
];

/// Lowest and highest generated price
pub const PRICE_BOUNDS: (u64, u64) = (3_000_000, 9_000_000);

/// Samples in each generated price history
pub const HISTORY_LEN: usize = 6;

/// Deterministic mock listing for demos and offline use
pub struct GeneratedSource {
    records: Vec<PropertyRecord>,
}

impl GeneratedSource {
    /// Generate `params.count` records from `params.seed`
    pub fn with_params(params: GeneratorParams) -> Self {
        info!(
            "📋 Generating {} mock properties (seed {})",
            params.count, params.seed
        );
        let mut rng = StdRng::seed_from_u64(params.seed);
        let records = (1..=params.count)
            .map(|n| generate_record(&mut rng, n))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn generate_record<R: Rng>(rng: &mut R, n: usize) -> PropertyRecord {
    let kind = pick(rng, KINDS);
    let city = pick(rng, CITIES);
    let bedrooms = rng.gen_range(1..=6u32);
    let bathrooms = rng.gen_range(1..=bedrooms);
    let price = rng.gen_range(PRICE_BOUNDS.0..=PRICE_BOUNDS.1) as f64;
    let size = (bedrooms as f64 * rng.gen_range(350.0..650.0f64)).round();
    let rating = (rng.gen_range(30..=50u32) as f64) / 10.0;

    let feature_count = rng.gen_range(1..=3);
    let features = FEATURES
        .choose_multiple(rng, feature_count)
        .map(|f| f.to_string())
        .collect();

    // drift the price a few percent per month, ending at today's price
    let mut price_history = Vec::with_capacity(HISTORY_LEN);
    let mut sample = price;
    for _ in 0..HISTORY_LEN {
        price_history.push(sample.round());
        sample *= 1.0 - rng.gen_range(-0.03..0.05);
    }
    price_history.reverse();

    PropertyRecord {
        id: format!("mock-{}", n),
        title: format!("{} {} in {}", pick(rng, ADJECTIVES), capitalize(kind), city),
        price,
        size,
        bedrooms,
        bathrooms,
        city: city.to_string(),
        image: format!("https://picsum.photos/seed/estate-{}/640/400", n),
        rating: Some(rating),
        property_type: Some(kind.to_string()),
        year_built: Some(rng.gen_range(1965..=2024)),
        features,
        price_history,
    }
}

#[async_trait]
impl DataSource for GeneratedSource {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        Ok(self.records.clone())
    }

    async fn fetch_one(&self, id: &str) -> Result<PropertyRecord, SourceError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}
