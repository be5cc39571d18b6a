//! Catalog normalization: raw records in, canonical records out.
//!
//! Normalization is batch tolerant. A record that cannot be turned into a
//! canonical `ToolRecord` is dropped and reported in
//! `NormalizedCatalog::dropped`; the rest of the batch continues. The
//! output depends only on the input, so normalizing the same input twice
//! yields identical records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::categories::canonical_category;
use super::identity::{first_non_blank, slugify};
use super::price_text::parse_price_text;
use super::raw::{PricingSchema, RawFeatures, RawPlan, RawPrice, RawRecord};
use crate::config::NormalizerConfig;
use crate::core::{
    Error, MalformedReason, Plan, Result, ToolFeatures, ToolRecord, DEFAULT_CATEGORY,
    DEFAULT_RATING,
};

/// A raw record the normalizer rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedRecord {
    /// Position of the record in the input batch
    pub index: usize,
    pub reason: MalformedReason,
}

/// Result of normalizing one batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedCatalog {
    /// Canonical records in input order
    pub tools: Vec<ToolRecord>,

    /// Records that were excluded, with the reason
    pub dropped: Vec<DroppedRecord>,
}

impl NormalizedCatalog {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Total records seen, kept or dropped.
    pub fn total_records(&self) -> usize {
        self.tools.len() + self.dropped.len()
    }
}

/// Normalize with default options.
pub fn normalize(raw: &[RawRecord]) -> NormalizedCatalog {
    Normalizer::default().normalize(raw)
}

/// Decode and normalize untyped JSON values with default options.
pub fn normalize_values(values: &[serde_json::Value]) -> NormalizedCatalog {
    Normalizer::default().normalize_values(values)
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, raw: &[RawRecord]) -> NormalizedCatalog {
        let mut collector = Collector::default();
        for (index, record) in raw.iter().enumerate() {
            collector.push(index, self.normalize_record(index, record));
        }
        collector.finish()
    }

    /// Decode each value independently; an element that does not decode is
    /// dropped as `Undecodable` instead of failing the batch.
    pub fn normalize_values(&self, values: &[serde_json::Value]) -> NormalizedCatalog {
        let mut collector = Collector::default();
        for (index, value) in values.iter().enumerate() {
            let result = RawRecord::deserialize(value)
                .map_err(|e| Error::malformed(index, MalformedReason::Undecodable(e.to_string())))
                .and_then(|record| self.normalize_record(index, &record));
            collector.push(index, result);
        }
        collector.finish()
    }

    /// Build one canonical record.
    ///
    /// Fails with `Error::MalformedRecord` when the record has no identity
    /// or carries a negative price.
    pub fn normalize_record(&self, index: usize, raw: &RawRecord) -> Result<ToolRecord> {
        let (id, name) = resolve_identity(raw)
            .ok_or_else(|| Error::malformed(index, MalformedReason::MissingIdentity))?;

        let pricing_plans = build_plans(raw.pricing_schema());
        if pricing_plans.iter().any(has_negative_price) {
            return Err(Error::malformed(index, MalformedReason::NegativePrice));
        }

        let overview = raw.overview.as_ref();
        let category = first_non_blank([
            raw.category.as_ref(),
            overview.and_then(|o| o.category.as_ref()),
        ])
        .map(|c| {
            if self.config.canonicalize_categories {
                canonical_category(c).to_string()
            } else {
                c.to_string()
            }
        })
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(ToolRecord {
            id,
            name,
            vendor: first_non_blank([
                raw.vendor.as_ref(),
                raw.developer.as_ref(),
                overview.and_then(|o| o.developer.as_ref()),
            ])
            .unwrap_or_default()
            .to_string(),
            description: first_non_blank([
                raw.description.as_ref(),
                overview.and_then(|o| o.description.as_ref()),
            ])
            .unwrap_or_default()
            .to_string(),
            category,
            features: build_features(raw),
            pricing_plans,
            rating: raw.rating.map_or(DEFAULT_RATING, |r| r.clamp(0.0, 5.0)),
            review_count: raw.review_count.unwrap_or(0),
            free_trial: raw.free_trial.unwrap_or(false),
            pros: raw.pros.clone().unwrap_or_default(),
            cons: raw.cons.clone().unwrap_or_default(),
            official_url: first_non_blank([
                raw.official_url.as_ref(),
                raw.website.as_ref(),
                overview.and_then(|o| o.website.as_ref()),
            ])
            .unwrap_or_default()
            .to_string(),
            affiliate_url: first_non_blank([raw.affiliate_link.as_ref()]).map(str::to_string),
        })
    }
}

/// Accumulates kept records and drops, enforcing id uniqueness.
#[derive(Default)]
struct Collector {
    seen_ids: HashSet<String>,
    catalog: NormalizedCatalog,
}

impl Collector {
    fn push(&mut self, index: usize, result: Result<ToolRecord>) {
        let outcome = result.and_then(|tool| {
            if self.seen_ids.insert(tool.id.clone()) {
                Ok(tool)
            } else {
                Err(Error::malformed(
                    index,
                    MalformedReason::DuplicateId(tool.id),
                ))
            }
        });

        match outcome {
            Ok(tool) => self.catalog.tools.push(tool),
            Err(Error::MalformedRecord { index, reason }) => {
                log::debug!("Dropping record {}: {}", index, reason);
                self.catalog.dropped.push(DroppedRecord { index, reason });
            }
            Err(other) => {
                // normalize_record only produces MalformedRecord
                log::warn!("Dropping record {}: {}", index, other);
                self.catalog.dropped.push(DroppedRecord {
                    index,
                    reason: MalformedReason::Undecodable(other.to_string()),
                });
            }
        }
    }

    fn finish(self) -> NormalizedCatalog {
        if !self.catalog.dropped.is_empty() {
            log::info!(
                "Normalized {} of {} records ({} dropped)",
                self.catalog.tools.len(),
                self.catalog.total_records(),
                self.catalog.dropped.len()
            );
        }
        self.catalog
    }
}

/// Resolve `(id, name)`. Either may stand in for the other; a missing id
/// is derived from the name.
fn resolve_identity(raw: &RawRecord) -> Option<(String, String)> {
    let name = first_non_blank([raw.name.as_ref(), raw.tool_name.as_ref()]);
    let explicit_id = first_non_blank([raw.id.as_ref(), raw.slug.as_ref()]);

    let id = match (explicit_id, name) {
        (Some(id), _) => id.to_string(),
        (None, Some(name)) => slugify(name),
        (None, None) => return None,
    };
    if id.is_empty() {
        return None;
    }

    let name = name.map(str::to_string).unwrap_or_else(|| id.clone());
    Some((id, name))
}

fn build_plans(schema: PricingSchema<'_>) -> Vec<Plan> {
    match schema {
        PricingSchema::Planned(plans) => plans
            .iter()
            .enumerate()
            .map(|(i, plan)| build_plan(i, plan))
            .collect(),
        PricingSchema::Flat { monthly, yearly } => {
            let name = match monthly {
                Some(price) if price == 0.0 => "Free",
                Some(_) => "Standard",
                None => "Custom",
            };
            vec![Plan {
                name: name.to_string(),
                monthly_price: monthly,
                yearly_price: yearly,
                features_included: Vec::new(),
            }]
        }
    }
}

fn build_plan(position: usize, raw: &RawPlan) -> Plan {
    let name = first_non_blank([raw.name.as_ref(), raw.plan_name.as_ref(), raw.plan.as_ref()])
        .map(str::to_string)
        .unwrap_or_else(|| format!("Plan {}", position + 1));

    let monthly_price = raw.price_per_month.or_else(|| match &raw.price {
        Some(RawPrice::Amount(amount)) => Some(*amount),
        Some(RawPrice::Text(text)) => parse_price_text(text),
        None => None,
    });

    Plan {
        name,
        monthly_price,
        yearly_price: raw.yearly_price,
        features_included: raw.features.clone(),
    }
}

fn has_negative_price(plan: &Plan) -> bool {
    plan.monthly_price.is_some_and(|p| p < 0.0) || plan.yearly_price.is_some_and(|p| p < 0.0)
}

fn build_features(raw: &RawRecord) -> ToolFeatures {
    let mut features = match &raw.features {
        Some(RawFeatures::Grouped(groups)) => ToolFeatures {
            core: dedup(&groups.core),
            advanced: dedup(&groups.advanced),
            integrations: dedup(&groups.integrations),
        },
        Some(RawFeatures::Flat(list)) => ToolFeatures {
            core: dedup(list),
            ..ToolFeatures::default()
        },
        None => ToolFeatures::default(),
    };

    if features.integrations.is_empty() {
        let fallback = raw
            .integrations
            .as_ref()
            .or_else(|| raw.overview.as_ref().and_then(|o| o.integrations.as_ref()));
        if let Some(list) = fallback {
            features.integrations = dedup(list);
        }
    }

    features
}

/// Remove blank and repeated entries, keeping first-seen order.
fn dedup(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flat_schema_synthesizes_single_plan() {
        let catalog = normalize(&[raw(json!({
            "name": "Writer",
            "pricing": {"monthly": 20.0, "yearly": 192.0}
        }))]);

        assert_eq!(catalog.dropped_count(), 0);
        let tool = &catalog.tools[0];
        assert_eq!(tool.id, "writer");
        assert_eq!(
            tool.pricing_plans,
            vec![Plan {
                name: "Standard".to_string(),
                monthly_price: Some(20.0),
                yearly_price: Some(192.0),
                features_included: vec![],
            }]
        );
    }

    #[test]
    fn flat_schema_names_free_and_custom_plans() {
        let catalog = normalize(&[
            raw(json!({"name": "Free Tool", "pricing": {"monthly": 0.0}})),
            raw(json!({"name": "Enterprise Tool"})),
        ]);

        assert_eq!(catalog.tools[0].entry_plan().unwrap().name, "Free");
        assert_eq!(catalog.tools[0].entry_plan().unwrap().monthly_price, Some(0.0));
        assert_eq!(catalog.tools[1].entry_plan().unwrap().name, "Custom");
        assert_eq!(catalog.tools[1].entry_plan().unwrap().monthly_price, None);
    }

    #[test]
    fn planned_schema_keeps_plan_order_and_parses_price_text() {
        let catalog = normalize(&[raw(json!({
            "tool_name": "Jasper",
            "vendor": "Jasper AI",
            "pricing": {
                "monthly": 39,
                "plans": [
                    {"plan_name": "Creator", "price": "$39/month", "features_included": ["1 seat"]},
                    {"plan_name": "Pro", "price": "$59/month"},
                    {"plan_name": "Business", "price": "Custom"}
                ]
            }
        }))]);

        let tool = &catalog.tools[0];
        assert_eq!(tool.name, "Jasper");
        assert_eq!(tool.vendor, "Jasper AI");
        let prices: Vec<_> = tool.pricing_plans.iter().map(|p| p.monthly_price).collect();
        assert_eq!(prices, vec![Some(39.0), Some(59.0), None]);
        assert_eq!(tool.pricing_plans[0].features_included, vec!["1 seat"]);
    }

    #[test]
    fn missing_fields_get_documented_defaults() {
        let catalog = normalize(&[raw(json!({"name": "Bare"}))]);
        let tool = &catalog.tools[0];

        assert_eq!(tool.rating, DEFAULT_RATING);
        assert_eq!(tool.review_count, 0);
        assert!(!tool.free_trial);
        assert!(tool.features.is_empty());
        assert!(tool.pros.is_empty());
        assert!(tool.cons.is_empty());
        assert_eq!(tool.category, DEFAULT_CATEGORY);
        assert_eq!(tool.vendor, "");
        assert_eq!(tool.affiliate_url, None);
        assert_eq!(tool.pricing_plans.len(), 1);
    }

    #[test]
    fn records_without_identity_are_dropped_and_counted() {
        let catalog = normalize(&[
            raw(json!({"name": "Kept"})),
            raw(json!({"description": "no name"})),
            raw(json!({"name": "!!!"})),
        ]);

        assert_eq!(catalog.tools.len(), 1);
        assert_eq!(
            catalog.dropped,
            vec![
                DroppedRecord {
                    index: 1,
                    reason: MalformedReason::MissingIdentity
                },
                DroppedRecord {
                    index: 2,
                    reason: MalformedReason::MissingIdentity
                },
            ]
        );
    }

    #[test]
    fn id_alone_is_enough_identity() {
        let catalog = normalize(&[raw(json!({"id": "perplexity"}))]);
        assert_eq!(catalog.tools[0].id, "perplexity");
        assert_eq!(catalog.tools[0].name, "perplexity");
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let catalog = normalize(&[
            raw(json!({"name": "Claude", "rating": 4.8})),
            raw(json!({"id": "claude", "name": "Claude Again"})),
        ]);

        assert_eq!(catalog.tools.len(), 1);
        assert_eq!(catalog.tools[0].rating, 4.8);
        assert_eq!(
            catalog.dropped[0].reason,
            MalformedReason::DuplicateId("claude".to_string())
        );
    }

    #[test]
    fn negative_prices_are_malformed() {
        let catalog = normalize(&[raw(json!({"name": "Broken", "pricing": {"monthly": -5.0}}))]);
        assert!(catalog.tools.is_empty());
        assert_eq!(catalog.dropped[0].reason, MalformedReason::NegativePrice);
    }

    #[test]
    fn ratings_are_clamped_into_range() {
        let catalog = normalize(&[
            raw(json!({"name": "High", "rating": 7.0})),
            raw(json!({"name": "Low", "rating": -1.0})),
        ]);
        assert_eq!(catalog.tools[0].rating, 5.0);
        assert_eq!(catalog.tools[1].rating, 0.0);
    }

    #[test]
    fn directory_records_read_overview_and_flat_features() {
        let catalog = normalize(&[raw(json!({
            "name": "Synthesia",
            "overview": {
                "developer": "Synthesia Ltd",
                "category": "Video Generation",
                "description": "AI video avatars",
                "website": "https://synthesia.io",
                "integrations": ["Zapier", "Zapier"]
            },
            "features": ["Avatars", "Voiceover", "Avatars"],
            "pricing": [{"plan": "Starter", "price_per_month": 22}],
            "affiliate_link": ""
        }))]);

        let tool = &catalog.tools[0];
        assert_eq!(tool.vendor, "Synthesia Ltd");
        assert_eq!(tool.category, "Video Generation");
        assert_eq!(tool.description, "AI video avatars");
        assert_eq!(tool.official_url, "https://synthesia.io");
        assert_eq!(tool.features.core, vec!["Avatars", "Voiceover"]);
        assert_eq!(tool.features.integrations, vec!["Zapier"]);
        assert_eq!(tool.entry_plan().unwrap().monthly_price, Some(22.0));
        assert_eq!(tool.affiliate_url, None);
    }

    #[test]
    fn categories_are_canonicalized_when_enabled() {
        let normalizer = Normalizer::new(NormalizerConfig {
            canonicalize_categories: true,
        });
        let catalog = normalizer.normalize(&[raw(json!({"name": "Say", "category": "tts"}))]);
        assert_eq!(catalog.tools[0].category, "Best Voice AI Tools");

        let plain = normalize(&[raw(json!({"name": "Say", "category": "tts"}))]);
        assert_eq!(plain.tools[0].category, "tts");
    }

    #[test]
    fn undecodable_values_are_dropped() {
        let catalog = normalize_values(&[
            json!({"name": "Good"}),
            json!(42),
            json!(["Bad"]),
        ]);

        assert_eq!(catalog.tools.len(), 1);
        assert_eq!(catalog.dropped_count(), 2);
        assert_eq!(catalog.dropped[0].index, 1);
        assert!(matches!(
            catalog.dropped[1].reason,
            MalformedReason::Undecodable(_)
        ));
    }

    #[test]
    fn compare_page_records_with_string_numbers_are_kept() {
        let catalog = normalize_values(&[
            json!({
                "name": "10Web",
                "pricing": [
                    {"plan": "Monthly", "price_per_month": 28, "billing_period": "monthly"},
                    {"plan": "Enterprise", "price_per_month": "Custom", "billing_period": "custom"}
                ],
                "rating": "4.7",
                "review_count": 172
            }),
            json!({"name": "Vague", "rating": "five", "review_count": "many"}),
        ]);

        assert!(catalog.dropped.is_empty(), "{:?}", catalog.dropped);
        let web = &catalog.tools[0];
        assert_eq!(web.id, "10web");
        assert_eq!(web.rating, 4.7);
        assert_eq!(web.review_count, 172);
        let prices: Vec<_> = web.pricing_plans.iter().map(|p| p.monthly_price).collect();
        assert_eq!(prices, vec![Some(28.0), None]);

        let vague = &catalog.tools[1];
        assert_eq!(vague.rating, DEFAULT_RATING);
        assert_eq!(vague.review_count, 0);
    }

    #[test]
    fn normalization_is_deterministic() {
        let input = vec![
            raw(json!({"name": "A", "pricing": {"monthly": 10.0}})),
            raw(json!({"name": "B", "features": {"core": ["x"]}})),
        ];
        assert_eq!(normalize(&input), normalize(&input));
    }
}
