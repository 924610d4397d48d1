use serde::Serialize;
use tracing::{debug, info};

use super::catalog::{Catalog, LicenseKind};
use super::{LicenseDetails, COMMERCIAL_FORBIDDEN, CUSTOM_LICENSE};

/// Template placeholder standing for "the same license" inside term texts.
pub const SAME_LICENSE_PLACEHOLDER: &str = "{license_type}";

/// What the placeholder becomes when the effective license is not a CC license.
pub const SAME_TERMS_PHRASE: &str = "相同的条款";

/// The license that actually applies once server policy has been enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLicense {
    pub license_type: String,
    pub kind: LicenseKind,
    pub details: LicenseDetails,
    /// Set when the author's choice was downgraded
    pub warning: Option<String>,
}

impl ResolvedLicense {
    pub fn is_cc(&self) -> bool {
        self.kind == LicenseKind::CreativeCommons
    }

    pub fn is_software(&self) -> bool {
        self.kind == LicenseKind::Software
    }
}

/// The non-commercial sibling name of a CC identifier, e.g.
/// `CC BY 4.0` -> `CC BY-NC 4.0`, `CC BY-SA 4.0` -> `CC BY-NC-SA 4.0`.
///
/// Purely textual: the result still has to be looked up in the catalog.
pub fn nc_variant(license_type: &str) -> Option<String> {
    if !license_type.contains("CC BY") {
        return None;
    }
    Some(license_type.replacen("CC BY", "CC BY-NC", 1))
}

fn is_non_commercial(license_type: &str) -> bool {
    license_type.contains("NC")
}

fn downgrade_warning(original: &str, adjusted: &str) -> String {
    format!(
        "**⚠️ 协议已自动调整**\n由于本服务器禁止商业用途，您误选择的协议 **{original}** 已被自动调整为 **{adjusted}**。"
    )
}

/// Work out the effective license for `details` under the server's commercial-use policy.
///
/// `details` is never modified; the result carries its own copy with catalog data
/// overlaid and `{license_type}` placeholders filled in.
pub fn resolve(
    details: &LicenseDetails,
    commercial_use_allowed: bool,
    catalog: &Catalog,
) -> ResolvedLicense {
    let mut working = details.clone();
    let mut license_type = details.license_type().to_string();
    let mut warning = None;

    if !commercial_use_allowed {
        if license_type == CUSTOM_LICENSE {
            working.commercial = Some(COMMERCIAL_FORBIDDEN.to_string());
        } else if catalog.is_cc(&license_type) && !is_non_commercial(&license_type) {
            let original = license_type.clone();

            let sibling = nc_variant(&original)
                .filter(|candidate| *candidate != original && catalog.is_cc(candidate));
            match sibling {
                Some(candidate) => license_type = candidate,
                None => {
                    license_type = CUSTOM_LICENSE.to_string();
                    working.commercial = Some(COMMERCIAL_FORBIDDEN.to_string());
                }
            }

            working.license_type = Some(license_type.clone());
            info!(from = %original, to = %license_type, "downgraded license to satisfy no-commercial-use policy");
            warning = Some(downgrade_warning(&original, &license_type));
        }
    }

    let kind = catalog.kind_of(&license_type);
    catalog.overlay(&license_type, &mut working);

    let replacement = match kind {
        LicenseKind::CreativeCommons => license_type.as_str(),
        _ => SAME_TERMS_PHRASE,
    };
    for term in [&mut working.reproduce, &mut working.derive, &mut working.commercial] {
        if let Some(text) = term.as_mut() {
            if text.contains(SAME_LICENSE_PLACEHOLDER) {
                *text = text.replace(SAME_LICENSE_PLACEHOLDER, replacement);
            }
        }
    }

    debug!(license = %license_type, ?kind, downgraded = warning.is_some(), "resolved license");

    ResolvedLicense {
        license_type,
        kind,
        details: working,
        warning,
    }
}
