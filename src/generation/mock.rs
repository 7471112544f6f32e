// Deterministic template text used whenever the hosted inference API is
// unavailable or fails. Pure function of the prompt.

use super::topic::extract_topic;

/// Produce templated educational text keyed on keywords in `prompt`.
pub fn generate_mock_content(prompt: &str) -> String {
    let prompt_lower = prompt.to_lowercase();

    if prompt_lower.contains("lesson") || prompt_lower.contains("content") {
        return lesson_template(&extract_topic(prompt));
    }

    if prompt_lower.contains("course structure") || prompt_lower.contains("outline") {
        return course_outline_template(&extract_topic(prompt));
    }

    format!(
        "Generated content for: {prompt}\n\n\
         This comprehensive guide covers all essential aspects with detailed explanations, \
         practical examples, and hands-on exercises designed to enhance your understanding and skills."
    )
}

// Sections are separated by blank lines so the lesson parser maps them positionally.
fn lesson_template(topic: &str) -> String {
    format!(
        "Title: {topic}

Description: This comprehensive lesson covers the essential concepts and practical applications.

Learning Outcomes:
- Understand the fundamental principles
- Apply concepts to real-world scenarios
- Develop practical skills and competencies

Key Concepts:
- Core foundations and terminology
- Best practices and methodologies
- Modern approaches and techniques

Activities:
- Interactive exercises and practice sessions
- Hands-on projects and implementations
- Assessment and evaluation components"
    )
}

fn course_outline_template(topic: &str) -> String {
    format!(
        "Course Structure for {topic}:

Module 1: Introduction to {topic} and Fundamentals
- Overview and basic concepts
- Historical context and evolution
- Key terminology and definitions

Module 2: Core {topic} Principles and Techniques
- Essential methodologies
- Practical applications
- Common patterns and approaches

Module 3: Advanced {topic} Topics and Implementation
- Complex scenarios and solutions
- Integration with other technologies
- Performance optimization

Module 4: {topic} Project and Assessment
- Capstone project development
- Peer review and collaboration
- Final assessment and certification"
    )
}
