use crate::models::screen::Office;

pub const PEDS_LOGO: &str = "/media/pmgPedsLogo.jpg";
pub const PRIMARY_CARE_LOGO: &str = "/media/pmgPrimaryCareLogo.jpg";
pub const SPA_LOGO: &str = "/media/pmgSPALOGO.jpg";

/// Office type fragments that select the pediatrics logo.
const PEDS_MARKERS: [&str; 2] = ["peds", "pediatric"];

/// Explicit `logo_url` wins; otherwise match on the office type, spa by default.
pub fn pick_logo(office: &Office) -> String {
    if let Some(url) = office.logo_url.as_deref().filter(|url| !url.is_empty()) {
        return url.to_string();
    }

    let office_type = office.office_type().unwrap_or_default().to_lowercase();
    let logo = if PEDS_MARKERS.iter().any(|marker| office_type.contains(marker)) {
        PEDS_LOGO
    } else if office_type.contains("primary") || office_type.contains("medical") {
        PRIMARY_CARE_LOGO
    } else {
        SPA_LOGO
    };
    logo.to_string()
}
