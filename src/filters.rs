use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::api::models::Campaign;

/// Browse-page filtering, applied client-side after fetching the listing.
#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub include_inactive: bool,
}

struct CampaignMatch {
    campaign: Campaign,
    score: i64,
}

/// Narrow a campaign listing by category and fuzzy search term. Search
/// matches against title and description; results are ordered best match
/// first when a term is given, otherwise listing order is kept.
pub fn filter_campaigns(campaigns: &[Campaign], filter: &CampaignFilter) -> Vec<Campaign> {
    let matcher = SkimMatcherV2::default();

    let mut matches: Vec<CampaignMatch> = campaigns
        .iter()
        .filter(|c| filter.include_inactive || c.is_active)
        .filter(|c| match &filter.category {
            Some(category) => c
                .category
                .as_deref()
                .is_some_and(|have| have.eq_ignore_ascii_case(category)),
            None => true,
        })
        .filter_map(|c| match &filter.search {
            None => Some(CampaignMatch {
                campaign: c.clone(),
                score: 0,
            }),
            Some(term) => {
                let title_score = matcher.fuzzy_match(&c.title, term);
                let description_score = c
                    .description
                    .as_deref()
                    .and_then(|d| matcher.fuzzy_match(d, term));
                title_score.max(description_score).map(|score| CampaignMatch {
                    campaign: c.clone(),
                    score,
                })
            }
        })
        .collect();

    if filter.search.is_some() {
        matches.sort_by(|a, b| b.score.cmp(&a.score));
    }

    matches.into_iter().map(|m| m.campaign).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn campaign(id: &str, title: &str, category: Option<&str>, active: bool) -> Campaign {
        serde_json::from_value(json!({
            "_id": id,
            "title": title,
            "category": category,
            "isActive": active
        }))
        .unwrap()
    }

    #[test]
    fn test_inactive_campaigns_hidden_by_default() {
        let campaigns = vec![
            campaign("1", "Open", None, true),
            campaign("2", "Closed", None, false),
        ];
        let result = filter_campaigns(&campaigns, &CampaignFilter::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");

        let all = filter_campaigns(
            &campaigns,
            &CampaignFilter {
                include_inactive: true,
                ..Default::default()
            },
        );
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let campaigns = vec![
            campaign("1", "Wells", Some("Health"), true),
            campaign("2", "Books", Some("education"), true),
        ];
        let result = filter_campaigns(
            &campaigns,
            &CampaignFilter {
                category: Some("health".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_fuzzy_search_ranks_better_matches_first() {
        let campaigns = vec![
            campaign("1", "School supplies", None, true),
            campaign("2", "Clean water wells", None, true),
            campaign("3", "Water for schools", None, true),
        ];
        let result = filter_campaigns(
            &campaigns,
            &CampaignFilter {
                search: Some("water".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.title.to_lowercase().contains("water")));
    }

    #[test]
    fn test_no_filter_keeps_listing_order() {
        let campaigns = vec![
            campaign("1", "B", None, true),
            campaign("2", "A", None, true),
        ];
        let result = filter_campaigns(&campaigns, &CampaignFilter::default());
        assert_eq!(result[0].id, "1");
        assert_eq!(result[1].id, "2");
    }
}
