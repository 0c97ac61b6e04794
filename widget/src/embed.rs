//! Example embed snippet for the extension popup mockup.
//!
//! The production snippet is generated by the backend and treated as an
//! opaque string everywhere in the UI; this builder exists only so the
//! popup can show a realistic mockup without a round trip. The `<script>`
//! shape mirrors the hosted loader contract: an api key, an assistant
//! identifier, and a `{position, color}` button config.

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

use crate::config::WidgetConfig;

/// Hosted loader script the snippet pulls in.
pub const LOADER_SRC: &str =
    "https://cdn.jsdelivr.net/gh/VapiAI/html-script-tag@latest/dist/assets/index.js";

/// Build the example `<script>` embed for an assistant.
#[must_use]
pub fn example_embed_snippet(api_key: &str, assistant_ref: &str, config: &WidgetConfig) -> String {
    format!(
        r#"<!-- Voicelet Widget -->
<script>
  var vapiInstance = null;
  const assistant = "{assistant_ref}";
  const apiKey = "{api_key}";

  (function (d, t) {{
    var g = document.createElement(t),
      s = d.getElementsByTagName(t)[0];
    g.src = "{LOADER_SRC}";
    g.defer = true;
    g.async = true;
    s.parentNode.insertBefore(g, s);
    g.onload = function () {{
      vapiInstance = window.vapiSDK.run({{
        apiKey: apiKey,
        assistant: assistant,
        config: {{
          position: "{position}",
          color: "{color}"
        }},
      }});
    }};
  }})(document, "script");
</script>"#,
        position = config.position.as_str(),
        color = config.color,
    )
}
