//! Static registry of the boilerplate templates the CLI knows about

use colored::Color;

/// A language variant of a framework, e.g. `react-ts`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub id: &'static str,
    pub display: &'static str,
    pub color: Color,
}

/// A framework family owning an ordered list of variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framework {
    pub id: &'static str,
    pub display: &'static str,
    pub color: Color,
    /// When empty the framework id itself is the selectable template
    pub variants: &'static [Variant],
}

/// A directly selectable template (framework + language variant)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub display: &'static str,
    /// Framework family, e.g. `react` for `react-ts`
    pub framework: &'static str,
    /// Language variant label, e.g. `TypeScript`
    pub variant: &'static str,
    pub color: Color,
}

const fn variant(id: &'static str, display: &'static str, color: Color) -> Variant {
    Variant { id, display, color }
}

const fn js_ts(js: &'static str, ts: &'static str) -> [Variant; 2] {
    [
        variant(ts, "TypeScript", Color::Blue),
        variant(js, "JavaScript", Color::Yellow),
    ]
}

const VANILLA: [Variant; 2] = js_ts("vanilla", "vanilla-ts");
const VUE: [Variant; 2] = js_ts("vue", "vue-ts");
const REACT: [Variant; 2] = js_ts("react", "react-ts");
const PREACT: [Variant; 2] = js_ts("preact", "preact-ts");
const LIT: [Variant; 2] = js_ts("lit", "lit-ts");
const SVELTE: [Variant; 2] = js_ts("svelte", "svelte-ts");
const SOLID: [Variant; 2] = js_ts("solid", "solid-ts");

static BUILTIN: &[Framework] = &[
    Framework {
        id: "vanilla",
        display: "Vanilla",
        color: Color::Yellow,
        variants: &VANILLA,
    },
    Framework {
        id: "vue",
        display: "Vue",
        color: Color::Green,
        variants: &VUE,
    },
    Framework {
        id: "react",
        display: "React",
        color: Color::Cyan,
        variants: &REACT,
    },
    Framework {
        id: "preact",
        display: "Preact",
        color: Color::Magenta,
        variants: &PREACT,
    },
    Framework {
        id: "lit",
        display: "Lit",
        color: Color::BrightRed,
        variants: &LIT,
    },
    Framework {
        id: "svelte",
        display: "Svelte",
        color: Color::Red,
        variants: &SVELTE,
    },
    Framework {
        id: "solid",
        display: "Solid",
        color: Color::Blue,
        variants: &SOLID,
    },
];

/// Read-only lookup over a fixed set of frameworks
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    frameworks: &'static [Framework],
}

impl Catalog {
    /// Catalog over an arbitrary static framework table
    pub const fn new(frameworks: &'static [Framework]) -> Self {
        Self { frameworks }
    }

    /// The templates shipped with the CLI
    pub const fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn frameworks(&self) -> &'static [Framework] {
        self.frameworks
    }

    pub fn framework(&self, id: &str) -> Option<&'static Framework> {
        self.frameworks.iter().find(|f| f.id == id)
    }

    /// Every selectable template in catalog order
    pub fn leaves(&self) -> impl Iterator<Item = TemplateDescriptor> + 'static {
        self.frameworks.iter().flat_map(|framework| {
            let own = framework
                .variants
                .is_empty()
                .then(|| TemplateDescriptor {
                    id: framework.id,
                    display: framework.display,
                    framework: framework.id,
                    variant: framework.display,
                    color: framework.color,
                });
            own.into_iter()
                .chain(framework.variants.iter().map(move |v| TemplateDescriptor {
                    id: v.id,
                    display: v.display,
                    framework: framework.id,
                    variant: v.display,
                    color: v.color,
                }))
        })
    }

    pub fn leaf_ids(&self) -> Vec<&'static str> {
        self.leaves().map(|leaf| leaf.id).collect()
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    pub fn resolve(&self, id: &str) -> Option<TemplateDescriptor> {
        self.leaves().find(|leaf| leaf.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
