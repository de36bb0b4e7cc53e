//! # Artifact Templates
//!
//! Ready-to-write text bodies for the generated artifacts. The rest of the
//! system treats these as opaque strings; nothing here is ever merged into an
//! existing file.

/// Vue 2 single-file component.
pub fn vue2_component(pascal: &str, kebab: &str, style_lang: Option<&str>) -> String {
    format!(
        r#"<template>
  <div class="{kebab}">
  </div>
</template>

<script>
export default {{
  name: '{pascal}',
  props: {{}}
}};
</script>

{style_open}
/* styles */
</style>
"#,
        style_open = style_tag(style_lang),
    )
}

/// Vue 3 single-file component (script setup).
pub fn vue3_component(pascal: &str, kebab: &str, style_lang: Option<&str>) -> String {
    format!(
        r#"<template>
  <div class="{kebab}">
  </div>
</template>

<script setup>
defineOptions({{
  name: "{pascal}"
}})
const props = defineProps({{}})
</script>

{style_open}
/* styles */
</style>
"#,
        style_open = style_tag(style_lang),
    )
}

fn style_tag(style_lang: Option<&str>) -> String {
    match style_lang {
        Some(lang) => format!("<style lang=\"{lang}\" scoped>"),
        None => "<style scoped>".to_string(),
    }
}

/// Style stub for the component's class.
pub fn style_stub(kebab: &str) -> String {
    format!(
        ".{kebab} {{\n  display: block;\n}}\n"
    )
}

/// Test stub. The Vue 2 variant uses `shallowMount`, the Vue 3 one `mount`.
pub fn test_stub(pascal: &str, vue_major: u8) -> String {
    if vue_major == 3 {
        format!(
            r#"import {{ mount }} from '@vue/test-utils';
import {pascal} from './{pascal}.vue';

describe('{pascal}', () => {{
  it('mounts', () => {{
    const wrapper = mount({pascal});
    expect(wrapper.exists()).toBe(true);
  }});
}});
"#
        )
    } else {
        format!(
            r#"import {{ shallowMount }} from '@vue/test-utils';
import {pascal} from './{pascal}.vue';

describe('{pascal}', () => {{
  it('exports a valid component', () => {{
    const wrapper = shallowMount({pascal});
    expect(wrapper.exists()).toBe(true);
  }});
}});
"#
        )
    }
}

/// Documentation markdown page for the component.
pub fn docs_markdown(pascal: &str, kebab: &str) -> String {
    format!(
        r#"
# {title}

`{pascal}` é um componente

<doc-example title="Exemplo" file="{kebab}/{kebab}-example" />


"#,
        title = heading_title(kebab),
    )
}

/// Kebab identifier rendered as a page title: capitalized, hyphens as spaces.
fn heading_title(kebab: &str) -> String {
    let spaced = kebab.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// Documentation example single-file component.
pub fn docs_example(pascal: &str) -> String {
    format!(
        r#"<template>
  <div>
    <{pascal} />
  </div>
</template>

<script>

export default {{
  name: '{pascal}Example'
}};
</script>

<style scoped>
/* estilos do exemplo */
</style>
"#
    )
}

/// Documentation API reference stub.
pub fn docs_api(_pascal: &str) -> String {
    r#"module.exports = {
  attributes: {
    data: [
      {
        prop: "",
        description: "",
        type: "",
        defaultValue: "",
        acceptedValues: "",
      },
    ],

    events: {
      columns: [
        { name: "name", label: "Nome do evento", truncate: false },
        { name: "description", label: "Descrição", truncate: false },
        { name: "payload", label: "Payload" },
      ],
      data: [
        {
          name: "",
          description: "",
          payload: "",
        },
      ],
    },
  },
};
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vue2_component_names_and_style_lang() {
        let body = vue2_component("UserButton", "user-button", Some("scss"));
        assert!(body.contains("class=\"user-button\""));
        assert!(body.contains("name: 'UserButton'"));
        assert!(body.contains("<style lang=\"scss\" scoped>"));
    }

    #[test]
    fn test_vue3_component_uses_script_setup() {
        let body = vue3_component("UserButton", "user-button", None);
        assert!(body.contains("<script setup>"));
        assert!(body.contains("name: \"UserButton\""));
        assert!(body.contains("<style scoped>"));
    }

    #[test]
    fn test_test_stub_variants() {
        assert!(test_stub("Alpha", 2).contains("shallowMount"));
        assert!(test_stub("Alpha", 3).contains("mount(Alpha)"));
    }

    #[test]
    fn test_docs_markdown_title_from_kebab() {
        let body = docs_markdown("UserButton", "user-button");
        assert!(body.contains("# User button"));
        assert!(body.contains("file=\"user-button/user-button-example\""));
    }
}
