//! CSS selectors for the profile, search and company pages.
//!
//! Scoped selectors (`EDU_*`, `EXP_*`, `ROLE_*`) are evaluated inside one
//! entry of the corresponding list.

pub const PROFILE_PREFIX: &str = "https://www.linkedin.com/in/";
pub const SCHOOL_PREFIX: &str = "https://www.linkedin.com/school/";
pub const COMPANY_PREFIX: &str = "https://www.linkedin.com/company/";

pub const NAME: &str = "ul.pv-top-card--list li";

pub const EDUCATION_ENTRIES: &str = "section#education-section ul > li";
pub const EDU_SCHOOL: &str = "div.pv-entity__degree-info h3";
pub const EDU_DEGREE: &str = "div.pv-entity__degree-info p.pv-entity__degree-name span:nth-of-type(2)";
pub const EDU_MAJOR: &str = "div.pv-entity__degree-info p.pv-entity__fos span:nth-of-type(2)";
pub const EDU_DATES: &str = "p.pv-entity__dates span:nth-of-type(2)";
pub const EDU_ACTIVITIES: &str = "p.pv-entity__secondary-title.t-black--light span:nth-of-type(2)";
pub const EDU_DESCRIPTION: &str = "div.pv-entity__extra-details";

pub const EXPERIENCE_ENTRIES: &str = "section#experience-section > ul > li";
pub const EXP_DATES: &str = "h4.pv-entity__date-range span:nth-of-type(2)";
pub const EXP_COMPANY_LINK: &str = "a[data-control-name='background_details_company']";
pub const EXP_ROLES: &str = "li.pv-entity__position-group-role-item";
pub const EXP_POSITION: &str = "h3.t-16.t-black.t-bold";
pub const EXP_COMPANY: &str = "p.pv-entity__secondary-title";
pub const EXP_DESCRIPTION: &str = "div.pv-entity__extra-details";
pub const EXP_GROUP_COMPANY: &str = "div.pv-entity__company-details h3 span:nth-of-type(2)";
pub const ROLE_POSITION: &str = "h3 span:nth-of-type(2)";
pub const ROLE_DATES: &str = "h4.pv-entity__date-range span:nth-of-type(2)";
pub const ROLE_DESCRIPTION: &str = "div.pv-entity__extra-details";

pub const SKILLS: &str = "span.pv-skill-category-entity__name-text";
pub const INTERESTS: &str = "section.pv-interests-section li h3";

pub const SEARCH_RESULTS: &str = "div.search-results li.search-result";
pub const SEARCH_RESULT_LINK: &str = "a[data-control-name='search_srp_result']";
pub const NEXT_BUTTON: &str = "button[aria-label='Next']";

pub const COMPANY_TERMS: &str = "dt.org-page-details__definition-term";
pub const COMPANY_DEFINITIONS: &str = "dd.org-page-details__definition-text";
