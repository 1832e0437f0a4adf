use crate::domain::models::ExerciseRecord;
use anyhow::Result;
use sqlx::SqlitePool;

struct SeedExercise {
    name: &'static str,
    description: &'static str,
    muscle_groups: &'static str,
    equipment: &'static str,
    difficulty: &'static str,
}

fn catalog_rows() -> Vec<SeedExercise> {
    vec![
        SeedExercise {
            name: "Squat",
            description: "A compound exercise that works the quadriceps, hamstrings, and glutes.",
            muscle_groups: "Legs, Glutes, Hamstrings",
            equipment: "Barbell, Rack",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Push-up",
            description: "Bodyweight exercise that works chest, shoulders, and triceps.",
            muscle_groups: "Push, Chest, Triceps",
            equipment: "",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Dumbbell Row",
            description: "Pull exercise for the upper back using dumbbells.",
            muscle_groups: "Pull, Back, Biceps",
            equipment: "Dumbbells",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Lunge",
            description: "Bodyweight or dumbbell exercise targeting legs and glutes.",
            muscle_groups: "Legs, Glutes, Hamstrings",
            equipment: "",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Goblet Squat",
            description: "Dumbbell-based leg and core workout.",
            muscle_groups: "Legs, Core, Quads",
            equipment: "Dumbbells",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Overhead Press",
            description: "Push exercise targeting shoulders and arms.",
            muscle_groups: "Push, Shoulders, Triceps",
            equipment: "Dumbbells, Barbell",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Step-up",
            description: "Leg and glute exercise using bodyweight or dumbbells.",
            muscle_groups: "Legs, Glutes",
            equipment: "",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Plank",
            description: "Core strengthening hold.",
            muscle_groups: "Core, Abs",
            equipment: "",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Pull-up",
            description: "Bodyweight pull exercise for the back and biceps.",
            muscle_groups: "Pull, Back, Biceps, Upper Body",
            equipment: "Pull-up Bar",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Bench Press",
            description: "Barbell push exercise for chest, shoulders, and triceps.",
            muscle_groups: "Push, Chest, Triceps, Upper Body",
            equipment: "Barbell, Bench",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Bent-over Row",
            description: "Barbell pull exercise for the upper back.",
            muscle_groups: "Pull, Back, Upper Body",
            equipment: "Barbell",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Dumbbell Shoulder Press",
            description: "Seated or standing push exercise for the shoulders.",
            muscle_groups: "Push, Shoulders, Upper Body",
            equipment: "Dumbbells",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Deadlift",
            description: "Heavy compound pull from the floor working the whole posterior chain.",
            muscle_groups: "Pull, Back, Hamstrings, Lower Body",
            equipment: "Barbell",
            difficulty: "Advanced",
        },
        SeedExercise {
            name: "Glute Bridge",
            description: "Bodyweight hip extension for glutes and hamstrings.",
            muscle_groups: "Lower Body, Glutes, Hamstrings",
            equipment: "",
            difficulty: "Beginner",
        },
        SeedExercise {
            name: "Jump Squat",
            description: "Explosive bodyweight squat variation.",
            muscle_groups: "Legs, Lower Body, Full Body",
            equipment: "",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Burpee",
            description: "Full body conditioning movement combining a squat, plank, and jump.",
            muscle_groups: "Full Body, Legs, Core",
            equipment: "",
            difficulty: "Intermediate",
        },
        SeedExercise {
            name: "Mountain Climber",
            description: "Dynamic plank drill for core and conditioning.",
            muscle_groups: "Full Body, Core, Legs",
            equipment: "",
            difficulty: "Beginner",
        },
    ]
}

/// Seed the exercise catalog once; a non-empty table is left untouched.
pub async fn seed_exercises(pool: &SqlitePool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    for exercise in catalog_rows() {
        sqlx::query(
            r#"
            INSERT INTO exercises (name, description, muscle_groups, equipment, difficulty)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(exercise.name)
        .bind(exercise.description)
        .bind(exercise.muscle_groups)
        .bind(exercise.equipment)
        .bind(exercise.difficulty)
        .execute(pool)
        .await?;
    }

    tracing::info!("Seeded exercise catalog");
    Ok(())
}

/// In-memory catalog for running without a database; same rows as the seed.
pub fn default_catalog() -> Vec<ExerciseRecord> {
    catalog_rows()
        .into_iter()
        .enumerate()
        .map(|(idx, exercise)| ExerciseRecord {
            id: idx as i64 + 1,
            name: exercise.name.to_string(),
            description: exercise.description.to_string(),
            muscle_groups: exercise.muscle_groups.to_string(),
            equipment: exercise.equipment.to_string(),
            difficulty: exercise.difficulty.to_string(),
        })
        .collect()
}
