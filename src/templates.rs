// Content generators for the scaffolded files
//
// All three producers are pure; the file writer trims surrounding whitespace
// before anything hits disk.

/// Fixed stylesheet content: a CSS reset plus two starter rules.
pub fn stylesheet() -> &'static str {
    r#"
/* CSS Reset */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

button {
  background: pink;
}

.fezzik::before {
  content: "woof";
}
"#
}

/// Starter script: a single log line naming the project.
///
/// The name is embedded verbatim, no quoting or escaping.
pub fn script(project_name: &str) -> String {
    format!("\nconsole.log(\"Hello from {}\")\n", project_name)
}

/// Minimal HTML document wired to the generated stylesheet and script, with
/// the project name as both the page title and the sole heading.
pub fn markup(project_name: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="stylesheet" href="./styles/main.css">
  <script src="./src/index.js" defer></script>
  <title>{name}</title>
</head>
<body>
  <h1>{name}</h1>
</body>
</html>
"#,
        name = project_name
    )
}
