// Prompt text for the screening call. `SCREENING_PROMPT_HEADER` takes
// `{job_description}` and `{keywords}`; each resume is rendered with
// `RESUME_BLOCK_TEMPLATE`; `SCREENING_INSTRUCTIONS` closes the prompt.

pub const SCREENING_PROMPT_HEADER: &str = r#"
I need to shortlist resumes based on the following job description and required skills.

Job Description:
{job_description}

Required Skills/Keywords:
{keywords}

Each resume is labeled by its filename.

Here are the resumes:
"#;

/// Replace `{filename}` and `{content}`.
pub const RESUME_BLOCK_TEMPLATE: &str = "\nResume: {filename}\nContent:\n{content}\n---\n";

pub const SCREENING_INSTRUCTIONS: &str = r#"
Instructions:
- Evaluate each resume using the job description and keywords.
- Score each resume out of 100 based on relevance, experience, and education.
- Return a list of shortlisted resumes (score >= 80) and rejected ones with reasons.
- Sort shortlisted resumes by score descending.

Return format:

Shortlisted:
1. Filename: <filename.pdf>
   Score: <score>
   Summary: <short reason>

Rejected:
1. Filename: <filename.pdf>
   Reason: <short reason>
   Score: <score>
"#;
