use crate::core::article::ArticleSummary;
use crate::domain::model::{as_text, CategoryOverview, Navigation, Settings};
use crate::utils::error::Result;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};
use serde::Serialize;
use std::path::Path;

pub const INDEX_TEMPLATE_NAME: &str = "index";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{site_name}}</title>
  {{#if site_description}}<meta name="description" content="{{site_description}}">{{/if}}
</head>
<body>
  <header class="px-4 py-4 md:px-6 md:py-6 border-b border-slate-100">
    <a href="/" class="text-xl font-semibold tracking-tight">{{site_name}}</a>
    <nav>
      <ul class="flex flex-wrap gap-6 md:gap-10">
        {{#each navigation}}
        <li class="font-semibold tracking-tight text-slate-800">{{#if href}}<a href="{{href}}">{{label}}</a>{{else}}{{label}}{{/if}}</li>
        {{/each}}
      </ul>
    </nav>
  </header>
  <main class="px-4 py-8 md:py-10 md:px-6 lg:py-12">
    <ul class="grid grid-cols-1 gap-16">
      {{#each categories}}
      <li>
        <div class="mb-12">
          <h2 class="font-bold leading-tight text-gray-900 text-5xl">{{category.data.name}}</h2>
          {{#each items}}
          <div class="my-8">
            <h3 class="font-bold leading-tight text-gray-900 text-2xl">{{title}}</h3>
            <ul>
              {{#each products}}
              <li class="leading-loosex text-gray-900">{{data.name}}</li>
              {{/each}}
            </ul>
          </div>
          {{/each}}
        </div>
      </li>
      {{/each}}
    </ul>
    {{#if show_articles}}
    <ul class="grid grid-cols-1 gap-16">
      {{#each articles}}
      <li class="grid grid-cols-1 items-start gap-6 md:grid-cols-3 md:gap-8">
        <a href="{{href}}" tabindex="-1">
          <div class="aspect-w-4 aspect-h-3 relative bg-gray-100">
            {{#if image_url}}<img src="{{image_url}}" alt="{{image_alt}}" class="object-cover">{{/if}}
          </div>
        </a>
        <div class="grid grid-cols-1 gap-3 md:col-span-2">
          <h2 class="font-sans text-3xl md:text-4xl"><a href="{{href}}">{{title}}</a></h2>
          {{#if date}}<p class="font-serif italic tracking-tighter text-slate-500">{{date}}</p>{{/if}}
          {{#if excerpt}}<p class="font-serif leading-relaxed md:text-lg md:leading-relaxed">{{excerpt}}</p>{{/if}}
        </div>
      </li>
      {{/each}}
    </ul>
    {{/if}}
  </main>
</body>
</html>
"#;

#[derive(Debug, Clone, Serialize)]
pub struct NavigationItem {
    pub label: String,
    pub href: Option<String>,
}

/// Template context for the index page.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub site_name: String,
    pub site_description: String,
    pub navigation: Vec<NavigationItem>,
    pub categories: &'a [CategoryOverview<'a>],
    pub articles: Vec<ArticleSummary>,
    pub show_articles: bool,
}

impl<'a> PageView<'a> {
    pub fn new(
        settings: &Settings,
        navigation: &Navigation,
        categories: &'a [CategoryOverview<'a>],
        articles: Vec<ArticleSummary>,
    ) -> Self {
        Self {
            site_name: as_text(&settings.data.name),
            site_description: as_text(&settings.data.description),
            navigation: navigation
                .data
                .links
                .iter()
                .map(|item| NavigationItem {
                    label: as_text(&item.label),
                    href: item.link.resolve_url(),
                })
                .collect(),
            categories,
            show_articles: !articles.is_empty(),
            articles,
        }
    }
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        Self::with_template(INDEX_TEMPLATE)
    }

    pub fn with_template(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_helper("format_date", Box::new(format_date));
        handlebars.register_template_string(INDEX_TEMPLATE_NAME, template)?;
        Ok(Self { handlebars })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let template = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded page template from {}", path.as_ref().display());
        Self::with_template(&template)
    }

    pub fn render(&self, view: &PageView<'_>) -> Result<String> {
        Ok(self.handlebars.render(INDEX_TEMPLATE_NAME, view)?)
    }
}

fn format_date(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let timestamp = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| {
            RenderError::from(RenderErrorReason::Other(
                "Timestamp parameter required".to_string(),
            ))
        })?;

    let format = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d");

    let formatted = match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format(format).to_string(),
        Err(_) => timestamp.to_string(),
    };

    out.write(&formatted)?;
    Ok(())
}
