// src/domain/filter.rs

use crate::domain::listing::{Category, Listing};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Listings picked by the AI gateway, plus its prose summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiMatches {
    pub ids: Vec<String>,
    pub summary: String,
}

/// Structured "where / who" search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassicCriteria {
    /// Matched as a case-insensitive substring of location or title.
    pub location_text: String,
    /// Minimum number of guests the listing must accommodate.
    pub guests: u32,
}

/// The active filter. Variants are mutually exclusive: choosing one drops the others.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterSelection {
    #[default]
    None,
    Ai(AiMatches),
    Classic(ClassicCriteria),
    Category(Category),
}

impl FilterSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, FilterSelection::None)
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            FilterSelection::Category(c) => Some(*c),
            _ => None,
        }
    }
}

/// Raw filter inputs where more than one source may be set at once.
///
/// Normalising picks a single winner: AI results, then classic criteria,
/// then category.
#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    pub ai: Option<AiMatches>,
    pub classic: Option<ClassicCriteria>,
    pub category: Option<Category>,
}

impl FilterInputs {
    pub fn into_selection(self) -> FilterSelection {
        if let Some(ai) = self.ai {
            return FilterSelection::Ai(ai);
        }
        if let Some(classic) = self.classic {
            return FilterSelection::Classic(classic);
        }
        if let Some(category) = self.category {
            return FilterSelection::Category(category);
        }
        FilterSelection::None
    }
}

/// What the home page shows for a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedView<'a> {
    /// Filtered results, in catalog order. May be empty.
    Flat(Vec<&'a Listing>),
    /// Unfiltered catalog by region, regions in first-seen order.
    Grouped(IndexMap<&'a str, Vec<&'a Listing>>),
}

impl<'a> DerivedView<'a> {
    /// True for a filtered view with no matches.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, DerivedView::Flat(list) if list.is_empty())
    }

    pub fn len(&self) -> usize {
        match self {
            DerivedView::Flat(list) => list.len(),
            DerivedView::Grouped(groups) => groups.values().map(Vec::len).sum(),
        }
    }
}

pub fn resolve<'a>(catalog: &'a [Listing], selection: &FilterSelection) -> DerivedView<'a> {
    match selection {
        FilterSelection::Ai(matches) => {
            let wanted: HashSet<&str> = matches.ids.iter().map(String::as_str).collect();
            DerivedView::Flat(
                catalog
                    .iter()
                    .filter(|l| wanted.contains(l.id.as_str()))
                    .collect(),
            )
        }
        FilterSelection::Classic(criteria) => {
            let needle = criteria.location_text.to_lowercase();
            DerivedView::Flat(
                catalog
                    .iter()
                    .filter(|l| {
                        let text_match = l.location.to_lowercase().contains(&needle)
                            || l.title.to_lowercase().contains(&needle);
                        text_match && l.capacity.guests >= criteria.guests
                    })
                    .collect(),
            )
        }
        FilterSelection::Category(category) => {
            DerivedView::Flat(catalog.iter().filter(|l| l.category == *category).collect())
        }
        FilterSelection::None => {
            let mut groups: IndexMap<&'a str, Vec<&'a Listing>> = IndexMap::new();
            for listing in catalog {
                groups.entry(listing.region()).or_default().push(listing);
            }
            DerivedView::Grouped(groups)
        }
    }
}
