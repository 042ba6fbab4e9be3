//! Built-in scenario catalogue.
//!
//! Each scenario starts from the committed baseline fixture and injects a
//! specific violation (or none) along with the literal diagnostic text the
//! tool must print for it. Scenarios run in declaration order.

use crate::expect::Expectation;
use crate::fixture::{LOCALE_PATH, THEME_PATH};
use crate::scenario::{Scenario, ToolKind};

/// Locale file whose single entry points at a source file that does not
/// exist, path relative to the locale directory.
const LOCALE_MISSING_SOURCE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en">
<context>
    <name>lmms::Song</name>
    <message>
        <location filename="../../src/core/non-existent.cpp" line="5"/>
        <source>Song</source>
        <translation>Song</translation>
    </message>
</context>
</TS>
"#;

/// Locale file whose context names a class no source file declares.
const LOCALE_UNKNOWN_CLASS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en">
<context>
    <name>lmms::NonExistentClass</name>
    <message>
        <location filename="../../src/core/Song.cpp" line="5"/>
        <source>Song</source>
        <translation>Song</translation>
    </message>
</context>
</TS>
"#;

/// Theme stylesheet selecting a class no source file declares.
const THEME_UNKNOWN_CLASS: &str = r#"lmms--NonExistentClass {
    color: #000000;
}
"#;

/// Patch touching a file absent from the source tree.
const PATCH_MISSING_SOURCE: &str = r#"--- a/plugins/non-existent-file
+++ b/plugins/non-existent-file
@@ -1 +1 @@
-old
+new
"#;

/// Copyright stanza whose Files glob matches nothing.
const COPYRIGHT_MISSING_GLOB: &str = r#"Format: https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/

Files: NonExistent
Copyright: 2026 Hygiene Harness
License: GPL-2+
"#;

/// Scenarios for the cross-reference checker.
pub fn reference_suite() -> Vec<Scenario> {
    vec![
        Scenario::new("reference baseline", ToolKind::Reference)
            .with_expect(Expectation::success().with_stdout("0 errors")),
        Scenario::new("locale missing source", ToolKind::Reference)
            .with_mutation(LOCALE_PATH, LOCALE_MISSING_SOURCE)
            .with_expect(
                Expectation::failure()
                    .with_stdout(
                        "Error: data/locale: Source file does not exist: \
                         ../../src/core/non-existent.cpp",
                    )
                    .with_stdout("1 errors"),
            ),
        Scenario::new("locale unknown class", ToolKind::Reference)
            .with_mutation(LOCALE_PATH, LOCALE_UNKNOWN_CLASS)
            .with_expect(
                Expectation::failure()
                    .with_stdout(
                        "Error: data/locale: Class does not exist in source code: \
                         NonExistentClass",
                    )
                    .with_stdout("1 errors"),
            ),
        Scenario::new("theme unknown class", ToolKind::Reference)
            .with_mutation(THEME_PATH, THEME_UNKNOWN_CLASS)
            .with_expect(
                Expectation::failure()
                    .with_stdout(
                        "Error: data/themes/default/style.css: \
                         Class does not exist in source code: NonExistentClass",
                    )
                    .with_stdout("1 errors"),
            ),
        Scenario::new("patch missing source", ToolKind::Reference)
            .with_mutation("debian/patches/clang.patch", PATCH_MISSING_SOURCE)
            .with_expect(
                Expectation::failure()
                    .with_stdout(
                        "Error: debian/patches/clang.patch: Source file does not exist: \
                         plugins/non-existent-file",
                    )
                    .with_stdout("1 errors"),
            ),
        Scenario::new("docs missing path", ToolKind::Reference)
            .with_mutation("debian/docs", "/plugins/caps.html")
            .with_expect(
                Expectation::failure()
                    .with_stdout("Error: debian/docs: Path does not exist: /plugins/caps.html")
                    .with_stdout("1 errors"),
            ),
        Scenario::new("copyright missing glob", ToolKind::Reference)
            .with_mutation("debian/copyright", COPYRIGHT_MISSING_GLOB)
            .with_expect(
                Expectation::failure()
                    .with_stdout("Error: debian/copyright: Glob/Path does not exist: NonExistent")
                    .with_stdout("1 errors"),
            ),
    ]
}

/// Scenarios for the namespace/preprocessor checker.
///
/// The structural scenario writes nine files (one of them valid, as a
/// control) whose names sort in declaration order, and asserts the tool's
/// full diagnostic block literally.
pub fn namespace_suite() -> Vec<Scenario> {
    let structural = Scenario::new("namespace structural violations", ToolKind::Namespace)
        .with_mutation(
            "src/checks/01_NoGuard.h",
            r#"#include "Song.h"

#ifndef LMMS_NO_GUARD_H
#define LMMS_NO_GUARD_H

namespace lmms {
} // namespace lmms

#endif // LMMS_NO_GUARD_H
"#,
        )
        .with_mutation(
            "src/checks/02_MissingEndif.cpp",
            r#"namespace lmms {

#ifdef LMMS_BUILD_LINUX
void platformInit();

} // namespace lmms
"#,
        )
        .with_mutation(
            "src/checks/03_IncludeInBlock.cpp",
            r#"namespace lmms {

#include "Song.h"

} // namespace lmms
"#,
        )
        .with_mutation(
            "src/checks/04_MissingComment.cpp",
            r#"namespace lmms {

class Mixer
{
};

}
"#,
        )
        .with_mutation(
            "src/checks/05_NoNamespace.cpp",
            r#"class Orphan
{
};
"#,
        )
        .with_mutation(
            "src/checks/06_GuardComment.h",
            r#"#ifndef LMMS_GUARD_COMMENT_H
#define LMMS_GUARD_COMMENT_H

namespace lmms {
} // namespace lmms

#endif
"#,
        )
        .with_mutation(
            "src/checks/07_NoNamespace.h",
            r#"#ifndef LMMS_PLAIN_H
#define LMMS_PLAIN_H

class Plain;

#endif // LMMS_PLAIN_H
"#,
        )
        .with_mutation(
            "src/checks/08_LateGuard.h",
            r#"extern int g_late;

#ifndef LMMS_LATE_GUARD_H
#define LMMS_LATE_GUARD_H
namespace lmms {
} // namespace lmms
#endif // LMMS_LATE_GUARD_H
"#,
        )
        .with_mutation(
            "src/checks/09_Valid.h",
            r#"#ifndef LMMS_VALID_H
#define LMMS_VALID_H

namespace lmms {

class Valid
{
};

} // namespace lmms

#endif // LMMS_VALID_H
"#,
        )
        .with_expect(Expectation::failure().with_stdout(
            "Error: src/checks/01_NoGuard.h:1: First statement should be header guard\n\
             Error: src/checks/02_MissingEndif.cpp:6: Expected #endif before }\n\
             Error: src/checks/03_IncludeInBlock.cpp:3: #include inside a code block\n\
             Error: src/checks/04_MissingComment.cpp:7: Missing comment // namespace lmms\n\
             Error: src/checks/05_NoNamespace.cpp: File has no namespace lmms\n\
             Error: src/checks/06_GuardComment.h:7: Missing comment // LMMS_GUARD_COMMENT_H\n\
             Error: src/checks/07_NoNamespace.h: File has no namespace lmms\n\
             Error: src/checks/08_LateGuard.h:1: First statement should be header guard\n\
             8 errors",
        ));

    vec![
        Scenario::new("namespace baseline", ToolKind::Namespace)
            .with_expect(Expectation::success().with_stdout("0 errors")),
        structural,
    ]
}

/// The full ordered catalogue: reference checker first, then namespace.
pub fn builtin() -> Vec<Scenario> {
    let mut scenarios = reference_suite();
    scenarios.extend(namespace_suite());
    scenarios
}
