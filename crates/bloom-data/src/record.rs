//! Generated company record type.
//!
//! The serialised field names are the contract shared with list and chart
//! consumers, so they follow the directory's camelCase shape.

use serde::{Deserialize, Serialize};

use crate::vocabulary::{
    BusinessType, Category, Certification, Country, EmployeeRange, RevenueRange, Specialty,
};

/// Prefix shared by every company identifier.
pub const ID_PREFIX: &str = "fc-";

/// A flower-industry company in the directory.
///
/// # Example
///
/// ```
/// use bloom_data::{
///     BusinessType, Category, CompanyRecord, Country, EmployeeRange, RevenueRange, Specialty,
/// };
///
/// let company = CompanyRecord {
///     id: CompanyRecord::id_for_index(0),
///     name: "Bloom Gardens".to_owned(),
///     category: Category::Florist,
///     specialty: vec![Specialty::Roses],
///     founded: 2010,
///     employees: EmployeeRange::From11To50,
///     business_type: BusinessType::B2c,
///     annual_revenue: RevenueRange::From1MTo5M,
///     headquarters: "New York".to_owned(),
///     country: Country::UnitedStates,
///     certifications: vec![],
///     description: "A leading florist specializing in roses.".to_owned(),
///     website: "https://www.bloom-gardens.com".to_owned(),
///     image_url: "https://picsum.photos/seed/fc-0001/400/300".to_owned(),
/// };
///
/// assert_eq!(company.id, "fc-0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// Identifier of the form `fc-NNNN`, 1-based.
    pub id: String,
    /// Trading name. Not guaranteed to be unique.
    pub name: String,
    /// Line of business.
    pub category: Category,
    /// One to four distinct specialties.
    pub specialty: Vec<Specialty>,
    /// Founding year.
    pub founded: i32,
    /// Head-count bracket.
    pub employees: EmployeeRange,
    /// Customer segment.
    pub business_type: BusinessType,
    /// Revenue bracket.
    pub annual_revenue: RevenueRange,
    /// Headquarters city.
    pub headquarters: String,
    /// Country of incorporation.
    pub country: Country,
    /// Zero to three distinct certifications.
    pub certifications: Vec<Certification>,
    /// Marketing blurb.
    pub description: String,
    /// Public website.
    pub website: String,
    /// Placeholder image.
    pub image_url: String,
}

impl CompanyRecord {
    /// Formats the identifier for the record at zero-based `index`.
    ///
    /// ```
    /// use bloom_data::CompanyRecord;
    ///
    /// assert_eq!(CompanyRecord::id_for_index(41), "fc-0042");
    /// ```
    #[must_use]
    pub fn id_for_index(index: usize) -> String {
        format!("{ID_PREFIX}{:04}", index.saturating_add(1))
    }
}
