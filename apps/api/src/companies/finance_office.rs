//! The Finance Office: invoices, expense reports, budgets, cash flow, VAT.
//!
//! All figures default to GBP and the UK 20% standard VAT rate.

use crate::companies::{Company, CompanyId, JobTemplate};

pub const SYSTEM_PROMPT: &str = "You are The Finance Office — TechCrossIT's AI accounting and finance team.
You produce HMRC-compliant, accurate financial documents for UK businesses.
Always use GBP (£) unless stated otherwise. Apply 20% standard VAT rate unless instructed.
Format numbers consistently: £12,500.00. Use ISO 8601 dates (DD Mon YYYY format for documents).
All output must be ready for immediate use — no placeholders for numbers the client provided.";

const GENERATE_INVOICE: &str = "Generate a complete, HMRC-compliant invoice based on the brief.
Include:
- Invoice number (format: INV-YYYYMMDD-XXXX), date, payment due date (30 days default)
- Seller and buyer details (use what's provided in the brief)
- Line items with quantity, unit price, and line total
- Subtotal, VAT @ 20%, and TOTAL DUE
- Payment terms and bank details placeholders
- Professional formatting in plain text / markdown

Brief: {{brief}}
Context: {{context}}";

const EXPENSE_REPORT: &str = "Create a professional expense report based on the details provided.
Include:
- Report title, employee name, period covered
- Itemised expense table (date, description, category, amount, VAT recoverable)
- Category subtotals
- Grand total and VAT total
- Approval line

Brief: {{brief}}
Context: {{context}}";

const CASHFLOW_PROJECTION: &str = "Build a 12-month cash flow projection based on the brief.
Include:
- Opening balance
- Monthly income (broken down by revenue stream where stated)
- Monthly outgoings (by category)
- Net cash flow per month
- Closing balance
- Commentary: 3 key observations about the projection
- Risk flags if any months go negative

Brief: {{brief}}
Context: {{context}}";

const BUDGET_TEMPLATE: &str = "Create a structured annual budget template.
Include:
- Revenue budget (split by product/service line if stated)
- Cost of Sales
- Gross Profit
- Operating expenses (HR, Marketing, Tech, Admin, etc.)
- EBITDA
- Monthly breakdown
- YTD actuals column (blank, ready to fill)
Format as a clear markdown table with all figures.

Brief: {{brief}}
Context: {{context}}";

const FINANCIAL_SUMMARY: &str = "Write a clear, board-ready financial summary report.
Include:
- Executive summary (3 key headlines)
- Revenue performance vs target
- Cost analysis
- Profitability metrics (gross margin, EBITDA)
- Cash position
- Key variances explained
- Forward outlook / recommendations
Length: 400-600 words plus supporting tables.

Brief: {{brief}}
Context: {{context}}";

const VAT_CALCULATION: &str = "Calculate and summarise VAT obligations based on the information provided.
Include:
- VAT registration threshold note (£90,000 UK 2024)
- Taxable supplies total
- VAT collected (output tax)
- VAT paid on purchases (input tax)
- Net VAT payable / reclaimable
- Quarterly return period
- Any applicable schemes (Flat Rate, Cash Accounting) if relevant

Brief: {{brief}}
Context: {{context}}";

const PAYMENT_REMINDER: &str = "Write a professional payment reminder email sequence (3 levels).
Level 1 (due date): polite reminder
Level 2 (7 days overdue): firm but friendly
Level 3 (14 days overdue): formal final notice
Each email: subject line, full body, and action required. Tone: {{tone}}.

Brief: {{brief}}
Context: {{context}}";

const PROFIT_LOSS: &str = "Generate a Profit & Loss statement based on the figures provided.
Include:
- Revenue (by category if available)
- Cost of Goods Sold / Cost of Sales
- Gross Profit & Gross Margin %
- Operating Expenses (itemised)
- Operating Profit (EBIT)
- Interest / Finance costs
- Profit Before Tax
- Tax estimate (25% Corporation Tax for UK)
- Net Profit & Net Margin %
- Period-over-period comparison if prior data provided

Brief: {{brief}}
Context: {{context}}";

pub fn company() -> Company {
    Company {
        id: CompanyId::FinanceOffice,
        name: "The Finance Office",
        tagline: "Invoices. Reports. Numbers sorted.",
        description: "AI bookkeeping and finance team. Generate HMRC-compliant invoices, \
            expense reports, cash-flow projections, budget templates, VAT summaries, \
            and board-ready financial reports.",
        phase: 1,
        icon: "💰",
        colour: "#F59E0B",
        price_from: "£0.50 / job",
        system_prompt: SYSTEM_PROMPT,
        default_tone: "professional",
        tone_suffixes: &[],
        jobs: vec![
            JobTemplate::new("generate_invoice", "Generate Invoice (VAT)", "~30s", GENERATE_INVOICE),
            JobTemplate::new("expense_report", "Expense Report", "~45s", EXPENSE_REPORT),
            JobTemplate::new("cashflow_projection", "Cash Flow Projection", "~60s", CASHFLOW_PROJECTION),
            JobTemplate::new("budget_template", "Budget Template", "~45s", BUDGET_TEMPLATE),
            JobTemplate::new("financial_summary", "Financial Summary Report", "~60s", FINANCIAL_SUMMARY),
            JobTemplate::new("vat_calculation", "VAT Return Summary", "~30s", VAT_CALCULATION),
            JobTemplate::new("payment_reminder", "Payment Reminder Email", "~20s", PAYMENT_REMINDER),
            JobTemplate::new("profit_loss", "P&L Statement", "~60s", PROFIT_LOSS),
        ],
    }
}
