use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;

use crate::article::Article;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"/css/main.css\">\n\
         </head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        escape(title),
        body
    ))
}

pub fn index_page(articles: &[Article], notice: Option<&str>) -> Html<String> {
    let mut body = String::new();
    if let Some(notice) = notice {
        let _ = writeln!(body, "<p class=\"notice\">{}</p>", escape(notice));
    }
    body.push_str("<h1>Articles</h1>\n");
    body.push_str("<p><a href=\"/articles/new\">Submit a new article</a></p>\n");

    if articles.is_empty() {
        body.push_str("<p class=\"empty\">No articles yet.</p>\n");
    } else {
        body.push_str("<ul class=\"articles\">\n");
        for article in articles {
            let _ = writeln!(
                body,
                "<li><a href=\"{}\">{}</a><p>{}</p></li>",
                escape(&article.url),
                escape(&article.title),
                escape(&article.description)
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Articles", &body)
}

/// Submission form, pre-filled and annotated when re-rendered after a
/// rejected submission.
pub fn new_article_page(article: Option<&Article>) -> Html<String> {
    let (title, url, description) = article
        .map(|a| (a.title.as_str(), a.url.as_str(), a.description.as_str()))
        .unwrap_or_default();

    let mut body = String::from("<h1>New Article</h1>\n");

    if let Some(errors) = article.map(Article::errors).filter(|e| !e.is_empty()) {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            let _ = writeln!(body, "<li>{}</li>", escape(error));
        }
        body.push_str("</ul>\n");
    }

    let _ = write!(
        body,
        "<form action=\"/articles\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"article[title]\" value=\"{}\"></label>\n\
         <label>URL <input type=\"text\" name=\"article[url]\" value=\"{}\"></label>\n\
         <label>Description <textarea name=\"article[description]\">{}</textarea></label>\n\
         <input type=\"submit\" value=\"Submit\">\n\
         </form>\n\
         <p><a href=\"/\">Back to articles</a></p>\n",
        escape(title),
        escape(url),
        escape(description)
    );

    layout("New Article", &body)
}

pub fn error_page(status: StatusCode) -> Html<String> {
    let heading = match status {
        StatusCode::NOT_FOUND => "Page not found",
        _ => "Something went wrong",
    };
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to articles</a></p>\n",
        heading,
        status.as_u16()
    );
    layout(heading, &body)
}
