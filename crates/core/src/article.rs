//! Article body renderer.
//!
//! Turns a title, an optional lead paragraph, and an ordered list of
//! [`ProductRecord`]s into the HTML body of a blog article. Rendering is
//! a pure function of its inputs: the template is embedded, fixed, and
//! the output is byte-identical for identical inputs.
//!
//! The template is registered under an `.html` name so Tera's HTML
//! auto-escaping applies to every interpolated field. The lead is the
//! one exception: it is supplied as HTML by the caller and rendered with
//! `| safe`.

use std::sync::LazyLock;

use serde::Serialize;
use tera::Tera;

use crate::price::format_price;
use crate::product::ProductRecord;

/// Registered template name. The `.html` suffix enables auto-escaping.
const TEMPLATE_NAME: &str = "article.html";

/// Fixed article layout: embedded stylesheet, centered header, one
/// product block per record separated by horizontal rules.
const ARTICLE_TEMPLATE: &str = r#"
  <style>
    .product-block {
      max-width: 640px;
      margin: 0 auto 82px;
      text-align: center;
    }
    .product-block img {
      width: 100%;
      max-width: 400px;
      height: auto;
      margin-bottom: 12px;
    }
    .product-title {
      font-size: 14px;
      line-height: 1.15;
      letter-spacing: .02em;
      margin: 0 0 2px;
      font-weight: 400;
      overflow-wrap: anywhere;
    }
    .product-price {
      font-size: 14px;
      margin: 0 0 6px;
      font-weight: 400;
      line-height: 1.15;
    }
    .product-link {
      font-size: 14px;
      color: #0011ffff;
      text-decoration: underline;
      letter-spacing: .04em;
    }
    hr {
      border: none;
      height: 1px;
      background: #eee;
      margin: 64px 0;
    }
  </style>

  <article style="
      max-width: 880px;
      margin: 0 auto;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Hiragino Kaku Gothic ProN', 'Noto Sans JP', sans-serif;
      line-height: 1.8;
  ">
    <header style="padding: 72px 0 16px; text-align:center;">
      <h1 style="font-size: 26px; letter-spacing: .03em; margin-bottom: 14px; font-weight: 400;">
        {{ title }}
      </h1>
      {% if lead %}<p style="max-width:640px;margin:0 auto;font-size:15px;color:#555;">{{ lead | safe }}</p>{% endif %}
    </header>

    <hr />

    {% for p in products %}
    <section class="product-block">
      {% if p.image %}<img src="{{ p.image }}" alt="{{ p.title }}">{% endif %}
      <div class="product-title">{{ p.title }}</div>
      <div class="product-price">{{ p.price }} (税込)</div>
      <a href="{{ p.url }}" target="_blank" class="product-link">商品詳細ページ</a>
    </section>
    <hr />
    {% endfor %}
  </article>
"#;

static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, ARTICLE_TEMPLATE)
        .expect("embedded article template parses");
    tera
});

/// Errors from article rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template engine rejected the render inputs.
    #[error("Article rendering failed: {0}")]
    Template(#[from] tera::Error),
}

/// Per-product template context: the record fields the template shows,
/// with the price already formatted for display.
#[derive(Serialize)]
struct ProductContext<'a> {
    image: Option<&'a str>,
    title: &'a str,
    price: String,
    url: &'a str,
}

/// Render the article body HTML.
///
/// `lead_html` may be empty, in which case no lead paragraph is emitted.
/// Products render in input order; a record without an image produces a
/// block with no `<img>` tag at all.
pub fn render_article(
    title: &str,
    lead_html: &str,
    products: &[ProductRecord],
) -> Result<String, RenderError> {
    let cards: Vec<ProductContext<'_>> = products
        .iter()
        .map(|p| ProductContext {
            image: p.image.as_deref(),
            title: &p.title,
            price: format_price(&p.price_amount, &p.currency_code),
            url: &p.url,
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("title", title);
    context.insert("lead", lead_html);
    context.insert("products", &cards);

    Ok(TEMPLATES.render(TEMPLATE_NAME, &context)?)
}
