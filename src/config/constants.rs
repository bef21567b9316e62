//! Static rule tables used by the default [`RuleSet`](crate::RuleSet).

/// Domains that look academic but are not.
///
/// These are matched as literal string suffixes against the canonical domain
/// and force-exclude an input before any other rule runs, so a subdomain of a
/// blacklisted domain is excluded as well. The entries are institutions that
/// hold an academic-looking registration (museums, state portals, commercial
/// directories) without being degree-granting schools.
pub const BLACKLIST: &[&str] = &[
    "si.edu",               // Smithsonian Institution
    "america.edu",          // commercial directory
    "californiacolleges.edu", // state planning portal
    "australia.edu",        // commercial directory
    "cet.edu",              // training company
    "folger.edu",           // Folger Shakespeare Library
];

/// Recognized academic top-level suffixes.
///
/// A canonical domain ending in any of these entries is accepted as academic
/// without a dataset entry (unless blacklisted). Every entry carries a leading
/// dot so that matching stays on a label boundary: `stanford.edu` ends with
/// `.edu`, `stanford.edu.com` does not.
pub const ACADEMIC_TLDS: &[&str] = &[
    ".ac.ae",
    ".ac.at",
    ".ac.bd",
    ".ac.be",
    ".ac.cn",
    ".ac.cr",
    ".ac.cy",
    ".ac.fj",
    ".ac.gg",
    ".ac.gn",
    ".ac.id",
    ".ac.il",
    ".ac.in",
    ".ac.ir",
    ".ac.jp",
    ".ac.ke",
    ".ac.kr",
    ".ac.ma",
    ".ac.me",
    ".ac.mu",
    ".ac.mw",
    ".ac.mz",
    ".ac.ni",
    ".ac.nz",
    ".ac.om",
    ".ac.pa",
    ".ac.pg",
    ".ac.pr",
    ".ac.rs",
    ".ac.ru",
    ".ac.rw",
    ".ac.sz",
    ".ac.th",
    ".ac.tz",
    ".ac.ug",
    ".ac.uk",
    ".ac.yu",
    ".ac.za",
    ".ac.zm",
    ".ac.zw",
    ".edu",
    ".edu.af",
    ".edu.al",
    ".edu.ar",
    ".edu.au",
    ".edu.az",
    ".edu.ba",
    ".edu.bb",
    ".edu.bd",
    ".edu.bh",
    ".edu.bi",
    ".edu.bn",
    ".edu.bo",
    ".edu.br",
    ".edu.bs",
    ".edu.bt",
    ".edu.bz",
    ".edu.ck",
    ".edu.cn",
    ".edu.co",
    ".edu.cu",
    ".edu.do",
    ".edu.dz",
    ".edu.ec",
    ".edu.ee",
    ".edu.eg",
    ".edu.er",
    ".edu.es",
    ".edu.et",
    ".edu.ge",
    ".edu.gh",
    ".edu.gi",
    ".edu.gp",
    ".edu.gr",
    ".edu.gt",
    ".edu.hk",
    ".edu.hn",
    ".edu.ht",
    ".edu.in",
    ".edu.iq",
    ".edu.jm",
    ".edu.jo",
    ".edu.kg",
    ".edu.kh",
    ".edu.kn",
    ".edu.kw",
    ".edu.ky",
    ".edu.kz",
    ".edu.lb",
    ".edu.lr",
    ".edu.lv",
    ".edu.ly",
    ".edu.mk",
    ".edu.mm",
    ".edu.mn",
    ".edu.mo",
    ".edu.mt",
    ".edu.mx",
    ".edu.my",
    ".edu.ni",
    ".edu.np",
    ".edu.om",
    ".edu.pa",
    ".edu.pe",
    ".edu.ph",
    ".edu.pk",
    ".edu.pl",
    ".edu.pr",
    ".edu.ps",
    ".edu.pt",
    ".edu.py",
    ".edu.qa",
    ".edu.rs",
    ".edu.ru",
    ".edu.sa",
    ".edu.sc",
    ".edu.sd",
    ".edu.sg",
    ".edu.sl",
    ".edu.sv",
    ".edu.sy",
    ".edu.tr",
    ".edu.tt",
    ".edu.tw",
    ".edu.ua",
    ".edu.uy",
    ".edu.ve",
    ".edu.vn",
    ".edu.ws",
    ".edu.ye",
    ".edu.zm",
    ".vic.edu.au",
];
