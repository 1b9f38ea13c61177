//! The Marketing Agency: blog posts, campaigns, social, SEO, ad copy.

use crate::companies::{Company, CompanyId, JobTemplate};

pub const SYSTEM_PROMPT: &str = "You are The Marketing Agency — TechCrossIT's AI content and copywriting team.
You create compelling, conversion-focused content that is brand-consistent and ready to publish.
Always match the requested tone. Write for humans, not search engines.
Structure output clearly: use headers, subheadings, and calls-to-action where appropriate.
Every piece of content must be complete and ready to use — no placeholders.";

const WRITE_BLOG_POST: &str = "Write a full, SEO-optimised blog post based on the brief below.
Include: H1 title, meta description (155 chars), introduction hook, 4-6 sections with H2 headings,
relevant statistics or examples, CTA at the end, and suggested 5 tags.
Length: 800-1200 words. Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

const SOCIAL_MEDIA_PACK: &str = "Create a social media content pack of 5 posts based on the brief.
Provide one post for each: LinkedIn, X (Twitter), Instagram, Facebook, and TikTok caption.
Each post must be platform-appropriate in length and style.
Include relevant hashtags. Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

const EMAIL_CAMPAIGN: &str = "Write a 3-email nurture campaign sequence.
Email 1 — Welcome/Introduction (day 1)
Email 2 — Value/Education (day 3)
Email 3 — Soft CTA / Offer (day 7)
Each email: subject line, preview text, full body copy, and CTA button text.
Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

const SEO_RESEARCH: &str = "Perform SEO keyword research for the topic below.
Provide:
1. Primary keyword (highest intent)
2. 10 secondary/long-tail keywords with estimated search intent (informational / transactional / navigational)
3. 5 competitor content gap opportunities
4. Recommended content structure for the primary keyword
5. Meta title and description suggestions

Topic: {{brief}}
Context: {{context}}";

const AD_COPY: &str = "Write high-converting ad copy for Google and Meta (Facebook/Instagram).
For Google Ads: 3 headlines (30 chars each), 2 descriptions (90 chars each), display URL path.
For Meta Ads: primary text (125 chars), headline (40 chars), description (30 chars).
Also provide: A/B variant for each format.
Tone: {{tone}}. Target audience context:
Brief: {{brief}}
Context: {{context}}";

const CONTENT_CALENDAR: &str = "Create a detailed 4-week content calendar for the following brand/campaign.
For each week: 2 blog post ideas (title + outline), 5 social posts spread across platforms,
1 email newsletter theme, 1 PR/outreach opportunity.
Format as a clean markdown table or structured list.
Brief: {{brief}}
Context: {{context}}";

const PRODUCT_DESCRIPTION: &str = "Write 5 compelling product/service descriptions based on the brief.
Each description: 80-120 words, benefit-led (not feature-led), with a strong closing CTA.
Include an SEO-friendly title for each.
Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

const PRESS_RELEASE: &str = "Write a professional press release based on the brief.
Structure: Headline, subheadline, dateline, lead paragraph (who/what/when/where/why),
body (2-3 paragraphs), quote from spokesperson, boilerplate about the company, contact details.
Follow AP/UK press release style. Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

pub fn company() -> Company {
    Company {
        id: CompanyId::MarketingAgency,
        name: "The Marketing Agency",
        tagline: "Content that converts. Always on.",
        description: "AI content strategists and copywriters. Blog posts, email campaigns, \
            social media content, SEO research, ad copy, and full content calendars — \
            all brand-matched and ready to publish.",
        phase: 1,
        icon: "📣",
        colour: "#EC4899",
        price_from: "£0.60 / job",
        system_prompt: SYSTEM_PROMPT,
        default_tone: "professional",
        tone_suffixes: &[],
        jobs: vec![
            JobTemplate::new("write_blog_post", "Write Blog Post", "~60s", WRITE_BLOG_POST),
            JobTemplate::new("social_media_pack", "Social Media Pack (5 posts)", "~75s", SOCIAL_MEDIA_PACK),
            JobTemplate::new("email_campaign", "Email Campaign (3 emails)", "~90s", EMAIL_CAMPAIGN),
            JobTemplate::new("seo_research", "SEO Keyword Research", "~45s", SEO_RESEARCH),
            JobTemplate::new("ad_copy", "Ad Copy (Google/Meta)", "~45s", AD_COPY),
            JobTemplate::new("content_calendar", "Monthly Content Calendar", "~75s", CONTENT_CALENDAR),
            JobTemplate::new("product_description", "Product Descriptions (x5)", "~60s", PRODUCT_DESCRIPTION),
            JobTemplate::new("press_release", "Press Release", "~60s", PRESS_RELEASE),
        ],
    }
}
