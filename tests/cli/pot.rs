use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const MAIN_C: &str = r#"#include <glib/gi18n.h>

int
main (int argc, char **argv)
{
  /* Translators: shown when the app starts */
  g_print ("%s\n", _("Hello"));
  g_print (ngettext ("%d file", "%d files", argc), argc);
  return 0;
}
"#;

const WINDOW_JS: &str = r#"import Gettext from 'gettext';

// Translators: window title
const title = Gettext.gettext("Hello");
const label = C_("button", "Open");
"#;

#[test]
fn test_pot_extracts_and_merges() -> Result<()> {
    let test = CliTest::with_file("src/main.c", MAIN_C)?;
    test.write_file("src/window.js", WINDOW_JS)?;
    test.write_file("POTFILES", "# sources\nsrc/main.c\nsrc/window.js\n")?;
    test.write_file("po/.keep", "")?;

    let output = test.pot_command("po/app.pot", "POTFILES").output()?;
    assert!(output.status.success());

    let body = test.read_catalog_body("po/app.pot")?;
    assert_eq!(
        body,
        r#"#. Translators: shown when the app starts
#. Translators: window title
#: src/main.c:7 src/window.js:4
msgid "Hello"
msgstr ""

#: src/main.c:8
#, c-format
msgid "%d file"
msgid_plural "%d files"
msgstr[0] ""
msgstr[1] ""

#: src/window.js:5
msgctxt "button"
msgid "Open"
msgstr """#
    );

    Ok(())
}

#[test]
fn test_pot_header() -> Result<()> {
    let test = CliTest::with_file("data/app.desktop.in", "[Desktop Entry]\nName=Example\n")?;
    test.write_file("POTFILES", "data/app.desktop.in\n")?;

    let output = test
        .pot_command("app.pot", "POTFILES")
        .args(["--issue-tracker", "https://example.org/issues"])
        .output()?;
    assert!(output.status.success());

    let content = test.read_file("app.pot")?;
    assert!(content.starts_with("# SOME DESCRIPTIVE TITLE.\n"));
    assert!(content.contains("\"Report-Msgid-Bugs-To: https://example.org/issues\\n\"\n"));
    assert!(content.contains("\"POT-Creation-Date: "));
    assert!(content.ends_with("#: data/app.desktop.in:3\nmsgid \"Example\"\nmsgstr \"\""));

    Ok(())
}

#[test]
fn test_pot_markup_files() -> Result<()> {
    let test = CliTest::with_file(
        "data/window.ui",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<interface>
  <!-- Translators: tooltip of the open button -->
  <object class="GtkButton">
    <property name="tooltip-text" translatable="yes">Open
      a file</property>
  </object>
</interface>
"#,
    )?;
    test.write_file(
        "data/org.example.App.gschema.xml",
        r#"<schemalist>
  <schema id="org.example.App">
    <key name="window-width" type="i">
      <default>800</default>
      <summary>Window width</summary>
    </key>
  </schema>
</schemalist>
"#,
    )?;
    test.write_file(
        "POTFILES",
        "data/window.ui\ndata/org.example.App.gschema.xml\n",
    )?;

    let output = test.pot_command("app.pot", "POTFILES").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_catalog_body("app.pot")?,
        r#"#. Translators: tooltip of the open button
#: data/window.ui:5
msgid "Open a file"
msgstr ""

#: data/org.example.App.gschema.xml:5
msgid "Window width"
msgstr """#
    );

    Ok(())
}

#[test]
fn test_pot_skips_bad_files_and_continues() -> Result<()> {
    let test = CliTest::with_file("src/main.c", "void f(void) {\n  _(\"Quit\");\n}\n")?;
    test.write_file("README.md", "# Readme\n")?;
    test.write_file("POTFILES", "README.md\nsrc/missing.c\nsrc/main.c\n")?;

    let output = test.pot_command("app.pot", "POTFILES").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "Outputting to app.pot...\n\u{2713} Extracted 1 string from 1 file\n\u{2718} 2 file(s) skipped\n"
    );

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning: No parser for file  unsupported-file\n  --> README.md\n"));
    assert!(stderr.contains("unreadable-file\n  --> src/missing.c\n"));

    assert!(test.read_file("app.pot")?.ends_with("#: src/main.c:2\nmsgid \"Quit\"\nmsgstr \"\""));

    Ok(())
}

#[test]
fn test_pot_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "const a = _('A');\n")?;
    test.write_file("POTFILES", "src/a.js\n")?;

    let output = test.pot_command("app.pot", "POTFILES").arg("-v").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Parsing... src/a.js\nOutputting to app.pot...\n"));

    Ok(())
}

#[test]
fn test_pot_format_comments_flag() -> Result<()> {
    let source = "void f(void) {\n  /* First line\n   * second line */\n  _(\"Text\");\n}\n";
    let test = CliTest::with_file("src/main.c", source)?;
    test.write_file("POTFILES", "src/main.c\n")?;

    test.pot_command("formatted.pot", "POTFILES").output()?;
    assert!(
        test.read_catalog_body("formatted.pot")?
            .starts_with("#. First line\n#. second line\n#: src/main.c:4\n")
    );

    test.pot_command("raw.pot", "POTFILES")
        .args(["--format-comments", "false"])
        .output()?;
    assert!(
        test.read_catalog_body("raw.pot")?
            .starts_with("#. First line\n#. * second line\n#: src/main.c:4\n")
    );

    Ok(())
}

#[test]
fn test_pot_config_file_settings() -> Result<()> {
    let test = CliTest::with_file(
        ".tree-gettext.json",
        r#"{ "issueTracker": "https://example.org/bugs" }"#,
    )?;
    test.write_file("src/a.js", "_('A');\n")?;
    test.write_file("POTFILES", "src/a.js\n")?;

    let output = test.pot_command("app.pot", "POTFILES").output()?;
    assert!(output.status.success());
    assert!(
        test.read_file("app.pot")?
            .contains("\"Report-Msgid-Bugs-To: https://example.org/bugs\\n\"\n")
    );

    Ok(())
}

#[test]
fn test_pot_missing_file_list_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.pot_command("app.pot", "POTFILES").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to read file list: POTFILES"));
    assert!(!test.root().join("app.pot").exists());

    Ok(())
}

#[test]
fn test_pot_unwritable_output_is_an_error() -> Result<()> {
    let test = CliTest::with_file("POTFILES", "")?;

    let output = test.pot_command("missing-dir/app.pot", "POTFILES").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Failed to write catalog"));

    Ok(())
}
