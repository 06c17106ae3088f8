// Resume extraction LLM prompt templates.
// All prompts for the parser module are defined here.

pub const RESUME_PARSE_SYSTEM: &str = "\
You are a precise resume data extractor. \
Extract structured profile data from raw resume text into JSON. \
You MUST respond with valid JSON only, with no markdown fences, no explanations. \
Only report information actually present in the resume; never invent \
skills, employers, or dates. Use null for anything you cannot find.";

pub const RESUME_PARSE_PROMPT: &str = r#"Analyze the following resume text and extract structured profile data.

RESUME TEXT:
{resume_text}

EMBEDDED HYPERLINKS (extracted from the PDF's clickable link annotations):
{embedded_links}

Extraction notes:
1. skills: take them from the resume's skills section; leave empty if there is none.
2. domain: the candidate's primary field, inferred from the skill set
   (e.g. "Frontend Development", "Cybersecurity", "DevOps", "Data Science").
3. graduation_year: the stated expected graduation year (YYYY), or null.
4. achievements: from the achievements section only, without dates.
5. experiences: from the experience section; is_current is true when the
   position has no end date.
6. For github_url and linkedin_url, PREFER a matching URL from the embedded
   hyperlinks above over anything you would guess from the text. linkedin_url
   must look like https://linkedin.com/in/username.

OUTPUT SCHEMA (return exactly this structure):
{
  "name": "full name",
  "email": "email address",
  "skills": ["skill1", "skill2"],
  "domain": "domain name or null",
  "graduation_year": YYYY or null,
  "achievements": ["achievement1", "achievement2"],
  "experiences": [
    {
      "company": "company name",
      "role": "job title",
      "description": "what they did there",
      "start_date": "YYYY-MM-DD",
      "end_date": "YYYY-MM-DD or null",
      "is_current": boolean
    }
  ],
  "certifications": [
    {
      "name": "certification name",
      "issuing_organization": "issuing organization or null"
    }
  ],
  "projects": [
    {
      "name": "project name",
      "description": "project description",
      "link": "project link or null"
    }
  ],
  "github_url": "github profile url or null",
  "linkedin_url": "linkedin profile url or null"
}

RULES:
1. Dates must be "YYYY-MM-DD". Use "YYYY-01-01" if only the year is known.
2. Return ONLY the JSON object and nothing else, no code fences."#;
