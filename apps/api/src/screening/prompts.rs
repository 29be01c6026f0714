// Prompts for candidate screening. Placeholders are `{name}` style and filled
// by `build_evaluation_prompt`.

pub const SCREENING_SYSTEM: &str = "You are a resume screening expert. \
    Evaluate candidates objectively based on job requirements. \
    Always return valid JSON.";

pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate if this candidate matches the job requirements:

Candidate Profile:
- Name: {name}
- Department: {department}
- Year: {year}
- CGPA: {cgpa}
- Backlogs: {backlogs}
- Has Resume: {has_resume}
- Internships: {internships}

Job Requirements:
- Title: {job_title}
- Description: {job_description}
- Eligibility: {job_eligibility}

Return JSON:
{
  "matchScore": 85,
  "matches": ["Has required skills", "Good CGPA"],
  "gaps": ["Missing certification"],
  "recommendation": "shortlist",
  "reason": "Brief reason for recommendation"
}

Recommendation should be: "shortlist", "maybe", or "reject"
Match score should be 0-100.

Return only valid JSON, no other text."#;
