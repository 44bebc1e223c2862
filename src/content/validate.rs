//! Content validation rules
//!
//! Violations are reported, not raised: a post that breaks an authoring rule
//! still loads and queries normally.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::{ContentStore, Post};
use crate::config::{LengthRule, ValidationRules};
use crate::helpers::strip_html;

lazy_static! {
    static ref SLUG_PATTERN: Regex = Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid");
}

/// One broken rule on one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub post: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.post, self.field, self.message)
    }
}

fn check_length(
    violations: &mut Vec<Violation>,
    post: &Post,
    field: &'static str,
    value: &str,
    rule: &LengthRule,
) {
    let len = value.chars().count();
    if len < rule.min_length {
        violations.push(Violation {
            post: post.id.clone(),
            field,
            message: format!("{} characters, minimum is {}", len, rule.min_length),
        });
    }
    if let Some(max) = rule.max_length {
        if len > max {
            violations.push(Violation {
                post: post.id.clone(),
                field,
                message: format!("{} characters, maximum is {}", len, max),
            });
        }
    }
}

/// Check one post against the rules
pub fn validate_post(post: &Post, rules: &ValidationRules) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_length(&mut violations, post, "title", &post.title, &rules.title);
    check_length(&mut violations, post, "excerpt", &post.excerpt, &rules.excerpt);
    // Content length counts visible text only
    check_length(
        &mut violations,
        post,
        "content",
        strip_html(&post.content).trim(),
        &rules.content,
    );

    if post.tags.len() < rules.min_tags || post.tags.len() > rules.max_tags {
        violations.push(Violation {
            post: post.id.clone(),
            field: "tags",
            message: format!(
                "{} tags, expected {} to {}",
                post.tags.len(),
                rules.min_tags,
                rules.max_tags
            ),
        });
    }
    for tag in &post.tags {
        if tag.chars().count() > rules.max_tag_length {
            violations.push(Violation {
                post: post.id.clone(),
                field: "tags",
                message: format!("tag {:?} is longer than {}", tag, rules.max_tag_length),
            });
        }
    }

    if !SLUG_PATTERN.is_match(&post.slug) {
        violations.push(Violation {
            post: post.id.clone(),
            field: "slug",
            message: format!("{:?} must match {}", post.slug, SLUG_PATTERN.as_str()),
        });
    }
    if post.slug.len() > rules.max_slug_length {
        violations.push(Violation {
            post: post.id.clone(),
            field: "slug",
            message: format!("longer than {}", rules.max_slug_length),
        });
    }

    violations
}

/// Check every post in the store
pub fn validate_store(store: &ContentStore, rules: &ValidationRules) -> Vec<Violation> {
    store
        .posts()
        .iter()
        .flat_map(|post| validate_post(post, rules))
        .collect()
}
