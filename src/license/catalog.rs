use indexmap::IndexMap;
use serde::Serialize;

use super::{LicenseDetails, CUSTOM_LICENSE};

/// Which table a license identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseKind {
    CreativeCommons,
    Software,
    Custom,
}

/// A Creative Commons entry. Term templates may contain `{license_type}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CcLicense {
    pub url: String,
    pub reproduce: String,
    pub derive: String,
    pub commercial: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftwareLicense {
    pub url: String,
    pub full_text: String,
}

/// Read-only reference data: CC licenses and software licenses by canonical name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cc: IndexMap<String, CcLicense>,
    software: IndexMap<String, SoftwareLicense>,
}

impl Catalog {
    pub fn new(
        cc: IndexMap<String, CcLicense>,
        software: IndexMap<String, SoftwareLicense>,
    ) -> Self {
        Self { cc, software }
    }

    /// The catalog the bot ships with.
    pub fn builtin() -> Self {
        let mut cc = IndexMap::new();
        for (name, path, reproduce, derive, commercial) in BUILTIN_CC {
            cc.insert(
                name.to_string(),
                CcLicense {
                    url: format!("https://creativecommons.org/licenses/{path}/4.0/deed.zh-hans"),
                    reproduce: reproduce.to_string(),
                    derive: derive.to_string(),
                    commercial: commercial.to_string(),
                },
            );
        }

        let mut software = IndexMap::new();
        for (name, url, full_text) in BUILTIN_SOFTWARE {
            software.insert(
                name.to_string(),
                SoftwareLicense {
                    url: url.to_string(),
                    full_text: full_text.to_string(),
                },
            );
        }

        Self { cc, software }
    }

    pub fn cc_licenses(&self) -> &IndexMap<String, CcLicense> {
        &self.cc
    }

    pub fn software_licenses(&self) -> &IndexMap<String, SoftwareLicense> {
        &self.software
    }

    pub fn cc(&self, name: &str) -> Option<&CcLicense> {
        self.cc.get(name)
    }

    pub fn software(&self, name: &str) -> Option<&SoftwareLicense> {
        self.software.get(name)
    }

    pub fn is_cc(&self, name: &str) -> bool {
        self.cc.contains_key(name)
    }

    pub fn is_software(&self, name: &str) -> bool {
        self.software.contains_key(name)
    }

    /// Anything not in either table, `custom` included, is a custom license.
    pub fn kind_of(&self, name: &str) -> LicenseKind {
        if name != CUSTOM_LICENSE && self.is_cc(name) {
            LicenseKind::CreativeCommons
        } else if name != CUSTOM_LICENSE && self.is_software(name) {
            LicenseKind::Software
        } else {
            LicenseKind::Custom
        }
    }

    /// Overwrite the fixed fields of a catalog license onto `details`.
    /// Stored values never win over catalog data.
    pub fn overlay(&self, name: &str, details: &mut LicenseDetails) {
        if let Some(entry) = self.cc(name) {
            details.url = Some(entry.url.clone());
            details.reproduce = Some(entry.reproduce.clone());
            details.derive = Some(entry.derive.clone());
            details.commercial = Some(entry.commercial.clone());
        } else if let Some(entry) = self.software(name) {
            details.url = Some(entry.url.clone());
            details.full_text = Some(entry.full_text.clone());
        }
    }
}

// (name, deed path, reproduce, derive, commercial)
const BUILTIN_CC: [(&str, &str, &str, &str, &str); 6] = [
    ("CC BY 4.0", "by", "允许，但需署名", "允许，但需署名", "允许"),
    (
        "CC BY-SA 4.0",
        "by-sa",
        "允许，但需署名",
        "允许，但需署名并以 {license_type} 共享",
        "允许",
    ),
    ("CC BY-ND 4.0", "by-nd", "允许，但需署名", "禁止", "允许"),
    ("CC BY-NC 4.0", "by-nc", "允许，但需署名", "允许，但需署名", "禁止"),
    (
        "CC BY-NC-SA 4.0",
        "by-nc-sa",
        "允许，但需署名",
        "允许，但需署名并以 {license_type} 共享",
        "禁止",
    ),
    ("CC BY-NC-ND 4.0", "by-nc-nd", "允许，但需署名", "禁止", "禁止"),
];

const BUILTIN_SOFTWARE: [(&str, &str, &str); 5] = [
    (
        "MIT",
        "https://opensource.org/license/mit",
        "可自由使用、复制、修改、合并、出版、分发、再授权及销售，唯一条件是在所有副本中保留版权声明和许可声明。软件按“原样”提供，不附带任何担保。",
    ),
    (
        "Apache-2.0",
        "https://www.apache.org/licenses/LICENSE-2.0",
        "可自由使用、修改和分发，并授予专利许可。分发时需保留版权、专利、商标及归属声明，修改过的文件需注明变更。若发起专利诉讼，专利授权自动终止。",
    ),
    (
        "GPL-3.0",
        "https://www.gnu.org/licenses/gpl-3.0.html",
        "可自由使用、修改和分发，但任何分发的衍生作品必须以 GPL-3.0 开源并提供完整源代码。不得附加额外限制。",
    ),
    (
        "MPL-2.0",
        "https://www.mozilla.org/MPL/2.0/",
        "以文件为单位的弱 Copyleft：修改过的 MPL 文件必须以 MPL-2.0 公开源代码，但可与其他协议的代码组合成更大的作品。",
    ),
    (
        "BSD-3-Clause",
        "https://opensource.org/license/bsd-3-clause",
        "可自由使用、修改和分发，需保留版权声明、条件列表和免责声明，且未经许可不得使用原作者或贡献者的名字为衍生产品背书。",
    ),
];
