//! The Support Desk: triage, responses, FAQs, knowledge base, escalations.

use crate::companies::{Company, CompanyId, JobTemplate};

pub const SYSTEM_PROMPT: &str = "You are The Support Desk — TechCrossIT's AI customer support team.
You are empathetic, clear, and solution-focused. Every response should leave the customer feeling heard and helped.
Match the client's brand tone. Never escalate unnecessarily — resolve at first contact where possible.
When triaging, be precise about priority and category. When writing documentation, be clear enough for a non-technical reader.";

const TRIAGE_TICKET: &str = "Triage the following support ticket. Provide:
- Priority: P1 (critical/outage) | P2 (urgent) | P3 (normal) | P4 (low)
- Category: Bug | Billing | Account | Feature Request | How-To | Complaint | Other
- Sentiment: Angry | Frustrated | Neutral | Happy
- Suggested assignee team: Technical / Billing / Customer Success / Management
- Suggested SLA: response within X hours
- 2-sentence summary of the issue
- Suggested resolution path (what needs to happen to close this)

Ticket: {{brief}}
Context: {{context}}";

const DRAFT_RESPONSE: &str = "Draft a professional, empathetic customer support response to the following ticket.
The response should:
- Acknowledge the customer's issue
- Apologise if appropriate (without admitting fault unless facts confirm it)
- Provide a clear resolution or next step
- Set expectations for timeline
- Close warmly with contact details
Max 200 words. Tone: {{tone}}.

Ticket / situation: {{brief}}
Context: {{context}}";

const WRITE_FAQ: &str = "Write a comprehensive FAQ article for the following topic/product feature.
Include: article title, 6-10 Q&As, a \"Still need help?\" footer section.
Use plain English. Organise questions from basic to advanced.

Topic: {{brief}}
Context: {{context}}";

const KNOWLEDGE_BASE_ENTRY: &str = "Write a knowledge base article for the following topic.
Structure:
- Title (action-oriented: \"How to...\", \"Understanding...\")
- Overview (2-3 sentences)
- Prerequisites (if any)
- Step-by-step instructions (numbered)
- Screenshots/video placeholders (note where visuals should go)
- Common errors and fixes
- Related articles (suggest 3 titles)
- Last updated: [today's date]

Topic: {{brief}}
Context: {{context}}";

const ESCALATION_REPORT: &str = "Write an escalation summary report for the following support situation.
Include:
- Incident summary
- Timeline of events
- Customer impact assessment
- Root cause (known or suspected)
- Actions taken so far
- Recommended escalation path
- Proposed resolution and timeline
- Lessons learned / prevention suggestions

Situation: {{brief}}
Context: {{context}}";

const ONBOARDING_EMAIL: &str = "Write a warm, helpful customer onboarding email sequence (3 emails).
Email 1 (day 0 - welcome): Welcome message, account setup steps, key resources
Email 2 (day 3 - getting started): First key action to take, quick wins, tip
Email 3 (day 7 - check-in): Progress check, feature highlight, invite to office hours/demo

Each email: subject line, preview text, full body, CTA. Tone: {{tone}}.
Brief: {{brief}}
Context: {{context}}";

const APOLOGY_LETTER: &str = "Write a sincere, professional service recovery letter for the following situation.
The letter should:
- Open with a genuine, specific apology
- Acknowledge the impact on the customer
- Explain briefly what happened (without over-explaining)
- State concrete steps being taken to fix/prevent this
- Offer a goodwill gesture (use [GOODWILL_GESTURE] placeholder if not specified)
- Close with a personal commitment

Situation: {{brief}}
Context: {{context}}";

const SUPPORT_WEEKLY_REPORT: &str = "Generate a weekly support report based on the data provided.
Include:
- Week summary (total tickets, resolution rate, avg response time)
- Ticket volume by category (table)
- Top 5 recurring issues
- Customer satisfaction highlights (positive + negative)
- SLA compliance rate
- Trends vs previous week
- 3 recommended actions for next week

Data / brief: {{brief}}
Context: {{context}}";

pub fn company() -> Company {
    Company {
        id: CompanyId::SupportDesk,
        name: "The Support Desk",
        tagline: "Every ticket answered. Every customer happy.",
        description: "AI customer support team that never sleeps. Triage tickets, \
            draft responses, write FAQs, build knowledge bases, handle escalations, \
            and generate weekly support reports.",
        phase: 1,
        icon: "🎧",
        colour: "#14B8A6",
        price_from: "£0.40 / job",
        system_prompt: SYSTEM_PROMPT,
        // Support copy leans warm unless the client asks otherwise.
        default_tone: "friendly",
        tone_suffixes: &[],
        jobs: vec![
            JobTemplate::new("triage_ticket", "Triage Support Ticket", "~20s", TRIAGE_TICKET),
            JobTemplate::new("draft_response", "Draft Customer Response", "~30s", DRAFT_RESPONSE),
            JobTemplate::new("write_faq", "Write FAQ Article", "~45s", WRITE_FAQ),
            JobTemplate::new("knowledge_base_entry", "Knowledge Base Entry", "~45s", KNOWLEDGE_BASE_ENTRY),
            JobTemplate::new("escalation_report", "Escalation Summary Report", "~45s", ESCALATION_REPORT),
            JobTemplate::new("onboarding_email", "Customer Onboarding Email", "~30s", ONBOARDING_EMAIL),
            JobTemplate::new("apology_letter", "Service Recovery Letter", "~30s", APOLOGY_LETTER),
            JobTemplate::new("support_weekly_report", "Weekly Support Report", "~60s", SUPPORT_WEEKLY_REPORT),
        ],
    }
}
