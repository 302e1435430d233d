//! Built-in sample catalog.

use crate::models::{Course, Level};

/// The fixed catalog used when no catalog file is configured.
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course::new(
            "angular-fundamentals",
            "Angular Fundamentals",
            "John Smith",
            "40 hours",
            Level::Beginner,
            "Frontend",
        )
        .with_description("Components, templates, dependency injection and routing.")
        .with_skills(["Angular", "TypeScript", "RxJS"]),
        Course::new(
            "react-advanced",
            "Advanced React Patterns",
            "Sarah Johnson",
            "30 hours",
            Level::Advanced,
            "Frontend",
        )
        .with_description("Hooks, context, render props and state management at scale.")
        .with_skills(["React", "Redux", "Hooks"]),
        Course::new(
            "node-rest-apis",
            "Building REST APIs with Node.js",
            "Michael Brown",
            "50 hours",
            Level::Intermediate,
            "Backend",
        )
        .with_description("Design and ship HTTP APIs with Express and middleware.")
        .with_skills(["Node.js", "Express", "REST"]),
        Course::new(
            "mongodb-essentials",
            "MongoDB Essentials",
            "John Smith",
            "20 hours",
            Level::Beginner,
            "Backend",
        )
        .with_description("Document modelling, indexes and the aggregation pipeline.")
        .with_skills(["MongoDB", "NoSQL", "Aggregation"]),
        Course::new(
            "spring-microservices",
            "Spring Boot Microservices",
            "Emily Davis",
            "60 hours",
            Level::Advanced,
            "Backend",
        )
        .with_description("Service decomposition, configuration and resilience with Spring.")
        .with_skills(["Java", "Spring Boot", "Microservices"]),
        Course::new(
            "git-workflow",
            "Git & Collaborative Workflow",
            "Sarah Johnson",
            "10 hours",
            Level::Beginner,
            "General",
        )
        .with_description("Branching, pull requests and code review etiquette.")
        .with_skills(["Git", "GitHub"]),
        Course::new(
            "python-data-analysis",
            "Python for Data Analysis",
            "David Wilson",
            "45 hours",
            Level::Intermediate,
            "Data Science",
        )
        .with_description("Cleaning, reshaping and summarising data with pandas.")
        .with_skills(["Python", "Pandas", "NumPy"]),
        Course::new(
            "docker-kubernetes",
            "Docker and Kubernetes",
            "Emily Davis",
            "35 hours",
            Level::Intermediate,
            "DevOps",
        )
        .with_description("Containers, orchestration and deployment pipelines.")
        .with_skills(["Docker", "Kubernetes", "CI/CD"]),
        Course::new(
            "agile-practices",
            "Agile Project Practices",
            "Michael Brown",
            "15 hours",
            Level::Beginner,
            "General",
        )
        .with_description("Planning, estimation and delivery in small teams.")
        .with_skills(["Scrum", "Kanban"]),
    ]
}
