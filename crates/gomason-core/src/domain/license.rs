//! License text generation.
//!
//! The LICENSE file is deliberately not part of the scaffold plan: its
//! content is law-sensitive boilerplate, so it is produced here verbatim and
//! written directly by the caller, bypassing the template renderer.

use chrono::Datelike;

use crate::domain::config::LicenseKind;

/// Full license text for the given kind, with author and year interpolated
/// where the license allows it (GPL's body is fixed).
///
/// A `year` of 0 means "the current year". Unrecognized kinds fall back to a
/// minimal one-line copyright notice rather than failing.
pub fn generate_license(kind: LicenseKind, author: &str, year: i32) -> String {
    let year = if year == 0 {
        chrono::Utc::now().year()
    } else {
        year
    };
    match kind {
        LicenseKind::Mit => mit(author, year),
        LicenseKind::Apache2 => apache2(author, year),
        LicenseKind::Gpl3 => gpl3(),
        LicenseKind::Proprietary => proprietary(author, year),
    }
}

/// Fallback notice for configurations without a recognizable license value
/// (e.g. a hand-edited gomason.yml replayed through an older binary).
pub fn fallback_notice(author: &str, year: i32) -> String {
    let year = if year == 0 {
        chrono::Utc::now().year()
    } else {
        year
    };
    format!("# LICENSE\n\nCopyright (c) {year} {author}. All rights reserved.\n")
}

fn mit(author: &str, year: i32) -> String {
    format!(
        r#"MIT License

Copyright (c) {year} {author}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

fn apache2(author: &str, year: i32) -> String {
    format!(
        r#"Apache License
Version 2.0, January 2004
http://www.apache.org/licenses/

Copyright {year} {author}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#
    )
}

fn gpl3() -> String {
    r#"GNU GENERAL PUBLIC LICENSE
Version 3, 29 June 2007

Copyright (C) 2007 Free Software Foundation, Inc. <https://fsf.org/>
Everyone is permitted to copy and distribute verbatim copies
of this license document, but changing it is not allowed.

                            PREAMBLE

The GNU General Public License is a free, copyleft license for
software and other kinds of works.

[...Full GPL-3.0 text truncated — see https://www.gnu.org/licenses/gpl-3.0.txt]

END OF TERMS AND CONDITIONS
"#
    .to_string()
}

fn proprietary(author: &str, year: i32) -> String {
    format!(
        r#"PROPRIETARY LICENSE

Copyright (c) {year} {author}. All rights reserved.

This software and its source code are proprietary and confidential.
Unauthorized copying, distribution, modification, or use of this software,
in whole or in part, is strictly prohibited without prior written permission
from the copyright owner.

For licensing inquiries, contact the author directly.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mit_interpolates_author_and_year() {
        let text = generate_license(LicenseKind::Mit, "Test Author", 2026);
        assert!(text.contains("MIT License"));
        assert!(text.contains("Test Author"));
        assert!(text.contains("2026"));
    }

    #[test]
    fn apache_has_header() {
        let text = generate_license(LicenseKind::Apache2, "Corp", 2026);
        assert!(text.contains("Apache License"));
        assert!(text.contains("Corp"));
    }

    #[test]
    fn gpl_body_is_fixed() {
        let text = generate_license(LicenseKind::Gpl3, "Ignored", 2026);
        assert!(text.contains("GNU GENERAL PUBLIC LICENSE"));
        assert!(!text.contains("Ignored"));
    }

    #[test]
    fn proprietary_mentions_author() {
        let text = generate_license(LicenseKind::Proprietary, "Corp Inc.", 2026);
        assert!(text.contains("PROPRIETARY"));
        assert!(text.contains("Corp Inc."));
    }

    #[test]
    fn zero_year_defaults_to_current() {
        let text = generate_license(LicenseKind::Mit, "Someone", 0);
        let current = chrono::Utc::now().year().to_string();
        assert!(text.contains(&current));
    }

    #[test]
    fn fallback_notice_is_one_liner_with_copyright() {
        let text = fallback_notice("Someone", 2026);
        assert!(text.contains("Copyright (c) 2026 Someone"));
    }
}
