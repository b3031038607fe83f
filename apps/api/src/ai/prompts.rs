//! Prompt builders for the AI providers. Every prompt instructs the model to
//! return JSON only; the parsing layer still repairs prose-wrapped output.

/// Prompt for structured skill extraction from raw CV text.
pub fn extract_skills_prompt(cv_text: &str) -> String {
    format!(
        r#"You are an expert CV/resume analyzer. Analyze the following CV/resume text and extract structured information.

CV Text:
{cv_text}

Please extract and return a JSON object with the following structure:
{{
  "technical_skills": [
    {{"name": "Python", "proficiency": "advanced", "category": "programming_language"}},
    {{"name": "React", "proficiency": "intermediate", "category": "framework"}}
  ],
  "soft_skills": ["communication", "leadership"],
  "roles": ["Software Engineer", "Full Stack Developer"],
  "certifications": ["AWS Certified Solutions Architect"],
  "tools": ["Git", "Docker", "Jenkins"]
}}

Guidelines:
- Extract ONLY what is explicitly mentioned or strongly implied in the CV
- Categories: programming_language, framework, library, database, cloud, devops, design_tool
- Proficiency levels: beginner, intermediate, advanced, expert (infer from context)
- Be comprehensive but accurate
- Return valid JSON only, no additional text"#
    )
}

/// Prompt for multi-phase career roadmap generation.
pub fn roadmap_prompt(
    target_role: &str,
    current_skills: Option<&str>,
    timeframe_months: u32,
    learning_hours_per_week: u32,
) -> String {
    let current_skills_text = current_skills
        .filter(|s| !s.is_empty())
        .map(|s| format!("\n\nCurrent skills: {s}"))
        .unwrap_or_default();

    format!(
        r#"You are an expert career advisor and learning path designer. Create a comprehensive learning roadmap for becoming a: {target_role}{current_skills_text}

Constraints: the learner has {timeframe_months} months and roughly {learning_hours_per_week} hours per week.

Return a JSON object with this structure:
{{
  "prerequisites": ["Basic programming knowledge"],
  "estimated_duration": "6-8 months",
  "difficulty": "intermediate",
  "phases": [
    {{
      "phase": 1,
      "title": "Fundamentals",
      "topics": ["JavaScript basics", "ES6+ features"],
      "duration": "4-6 weeks",
      "technologies": ["Node.js"],
      "resources": ["MDN Web Docs"],
      "learning_goals": ["Build a CLI tool"]
    }}
  ],
  "project_suggestions": ["Portfolio site with CI/CD"],
  "job_application_timing": "Apply after completing phase 3"
}}

Guidelines:
- Create 4-6 phases with logical progression
- Each phase MUST have specific, actionable topics
- Include realistic time estimates that fit the stated constraints
- Skip material the current skills already cover
- Return valid JSON only"#
    )
}
