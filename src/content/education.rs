//! Leveled educational content: conditions and topics explained at up to
//! five complexity levels.

use crate::domain::{
    Citation, ClinicalRelevance, ComplexityLevel, ContentKind, ContentStatus, ContentTags,
    CrossReference, Entry, ExamRelevance, LevelContent, MediaReference,
};

use super::authored_on;

/// All leveled entries
pub fn entries() -> Vec<Entry> {
    vec![
        medical_nutrition_therapy(),
        celiac_disease(),
        adhd(),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn citation(id: &str, kind: &str, title: &str, authors: &[&str], source: &str) -> Citation {
    Citation {
        id: id.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        authors: strings(authors),
        source: source.to_string(),
        url: None,
        chapter: None,
    }
}

fn medical_nutrition_therapy() -> Entry {
    let authored = authored_on(2026, 1, 26);

    Entry::new("nutrition-medical-therapy", ContentKind::Topic, "Medical Nutrition Therapy")
        .with_alternate_names(["MNT", "Clinical Nutrition", "Therapeutic Nutrition"])
        .with_level(
            LevelContent::new(
                ComplexityLevel::BASIC,
                "Medical nutrition therapy means using food and nutrition to help treat health conditions. \
                 Just like medicine helps you feel better, the right foods can help manage diabetes, kidney \
                 disease, liver problems, and many other health issues.",
                "## What Is Medical Nutrition Therapy?\n\n\
                 Medical nutrition therapy (MNT) is like using food as medicine. Registered dietitians and \
                 doctors use special diets to help treat and manage health conditions.\n\n\
                 **Food Can Help:**\n\
                 - Control blood sugar in diabetes\n\
                 - Reduce strain on kidneys\n\
                 - Help the liver heal\n\
                 - Manage high blood pressure\n\
                 - Treat digestive problems, such as avoiding gluten in celiac disease",
            )
            .with_term("medical nutrition therapy", "Using nutrition and diet to treat and manage medical conditions")
            .with_term("registered dietitian", "Health professional who specializes in food and nutrition for health")
            .with_term("blood sugar", "The amount of glucose (sugar) in your blood; important for diabetes management")
            .with_term("sodium", "A mineral found in salt; too much can raise blood pressure and strain kidneys")
            .with_term("trigger foods", "Foods that cause symptoms or make a condition worse")
            .with_analogy("Medical nutrition therapy is like having a personalized roadmap for eating - it guides you to your destination of better health.")
            .with_analogy("A dietitian is like a translator - they turn complex medical information into practical food choices.")
            .with_example("A person with diabetes learns to count carbohydrates to keep blood sugar stable")
            .with_example("Someone with kidney disease learns to limit bananas and potatoes (high potassium)"),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::INTERMEDIATE,
                "Medical nutrition therapy (MNT) is an evidence-based approach to treating certain chronic \
                 conditions through nutrition. Registered dietitians provide individualized nutrition \
                 assessment, education, and interventions for conditions including diabetes, kidney disease, \
                 liver disease, and gastrointestinal disorders.",
                "## Core Interventions\n\n\
                 - **Diabetes:** carbohydrate counting and consistent meal timing\n\
                 - **Hypertension:** the DASH eating pattern and sodium restriction\n\
                 - **Irritable bowel syndrome:** a low-FODMAP elimination diet followed by reintroduction\n\
                 - **Cirrhosis with ascites:** 2 g sodium diet to reduce fluid retention",
            )
            .with_term("carbohydrate counting", "Method of meal planning for diabetes that tracks grams of carbohydrate")
            .with_term("glycemic index", "Scale ranking how quickly carbohydrate-containing foods raise blood glucose")
            .with_term("DASH diet", "Dietary Approaches to Stop Hypertension; evidence-based eating pattern to lower blood pressure")
            .with_term("FODMAP", "Fermentable oligosaccharides, disaccharides, monosaccharides, and polyols; carbs that can cause GI symptoms")
            .with_analogy("The FODMAP diet is like detective work - you eliminate suspects (foods) and then reintroduce them to find the culprit.")
            .with_example("IBS patient follows low-FODMAP diet for 6 weeks, then systematically reintroduces foods")
            .with_counseling_point("Work with a registered dietitian for personalized nutrition therapy"),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::ADVANCED,
                "Medical nutrition therapy applies pathophysiology and biochemistry to develop targeted dietary \
                 interventions for disease management. Evidence-based protocols exist for diabetes, renal \
                 disease, hepatic disorders, cardiovascular disease, and gastrointestinal conditions with \
                 specific macronutrient and micronutrient modifications.",
                "## Disease-Specific Protocols\n\n\
                 - **CKD stages 3-5:** individualized protein targets with potassium and phosphorus limits\n\
                 - **Cirrhosis:** adequate protein (1.2-1.5 g/kg) with a late evening snack\n\
                 - **Nutrition support:** enteral feeding is preferred when the gut works\n\
                 - **Refeeding syndrome:** start slowly and replete phosphate, potassium and magnesium",
            )
            .with_term("enteral nutrition", "Delivery of nutrients directly to the GI tract via tube feeding")
            .with_term("refeeding syndrome", "Dangerous shift of fluids and electrolytes with nutrition reinitiation in malnourished patients")
            .with_term("permissive underfeeding", "Providing fewer calories than estimated needs in critically ill, obese patients")
            .with_example("ICU patient develops hypophosphatemia on day 2 of tube feeding without electrolyte repletion")
            .with_clinical_notes(
                "Screen all malnourished patients for refeeding risk before initiating nutrition support. \
                 Check thiamine levels and replace before giving dextrose in at-risk patients. In CKD stages \
                 3-5, protein should NOT be over-restricted due to malnutrition risk.",
            ),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::CLINICAL,
                "Advanced medical nutrition therapy integrates pathophysiology, evidence-based practice, and \
                 specialized nutrition support for complex conditions. Clinical applications include \
                 management of diabetes complications, end-stage renal disease, liver transplantation, and \
                 critical illness with nutrition support.",
                "## Complex Presentations\n\n\
                 - Diabetic gastroparesis: liquid meals are often better tolerated\n\
                 - Peritoneal dialysis: dextrose absorbed from dialysate adds calories\n\
                 - Post-transplant: immunosuppression raises the risk of new-onset diabetes",
            )
            .with_term("gastroparesis", "Delayed gastric emptying from autonomic neuropathy; common complication of diabetes")
            .with_term("euglycemic DKA", "DKA with normal or mildly elevated glucose; can occur with SGLT2 inhibitors")
            .with_term("NODAT", "New-onset diabetes after transplantation; common complication of immunosuppressive therapy")
            .with_analogy("Diabetes with CKD is like walking a tightrope - you need to balance blood sugar control against kidney protection.")
            .with_clinical_notes(
                "SGLT2 inhibitors can cause euglycemic DKA even with normal glucose; hold during fasting, \
                 surgery, or acute illness. Post-transplant, screen for NODAT regularly.",
            ),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::EXPERT,
                "Expert-level medical nutrition therapy integrates research on nutrition-gene interactions, \
                 microbiome modulation, and specialized protocols for complex conditions including \
                 immunonutrition, mitochondrial disorders, and personalized nutrition approaches based on \
                 metabolomics and biomarkers.",
                "## Research Frontiers\n\n\
                 - Pharmaconutrition and immunonutrition in surgery and critical illness\n\
                 - Ketogenic therapy for refractory epilepsy\n\
                 - Microbiome-directed interventions, including fecal microbiota transplantation",
            )
            .with_term("immunonutrition", "Use of specific nutrients to modulate immune response in critical illness")
            .with_term("dysbiosis", "Imbalance in gut microbiota composition associated with disease")
            .with_term("nutrigenomics", "Study of how genetic variation affects response to nutrients and dietary patterns")
            .with_example("Child with refractory epilepsy achieves >90% seizure reduction on 4:1 ketogenic diet"),
        )
        .with_media(MediaReference {
            id: "diabetes-plate-method".to_string(),
            kind: "diagram".to_string(),
            filename: "diabetes-plate-method.svg".to_string(),
            title: "Diabetes Plate Method".to_string(),
            description: "Visual guide for diabetes meal planning using the plate method".to_string(),
        })
        .with_citation(citation(
            "diabetes-mnt-standards",
            "article",
            "Standards of Medical Care in Diabetes",
            &["American Diabetes Association"],
            "Diabetes Care",
        ))
        .with_citation(citation(
            "aspen-guidelines",
            "article",
            "ASPEN Guidelines for Nutrition Support of Critically Ill Patients",
            &["ASPEN Board of Directors"],
            "JPEN Journal of Parenteral and Enteral Nutrition",
        ))
        .with_cross_reference(CrossReference::new("celiac-disease", "condition", "related", "Celiac Disease"))
        .with_cross_reference(CrossReference::new("renal-ckd", "condition", "related", "Chronic Kidney Disease"))
        .with_tags(ContentTags {
            systems: strings(&["gastrointestinal", "endocrine", "renal"]),
            topics: strings(&["nutrition", "therapeutics", "critical-care", "chronic-disease"]),
            keywords: Vec::new(),
            clinical_relevance: Some(ClinicalRelevance::Critical),
            exam_relevance: Some(ExamRelevance {
                usmle: true,
                nbme: true,
                shelf: strings(&["medicine", "surgery", "family-medicine"]),
            }),
        })
        .with_status(ContentStatus::Published)
        .authored(authored, authored)
}

fn celiac_disease() -> Entry {
    let authored = authored_on(2026, 2, 3);

    Entry::new("celiac-disease", ContentKind::Condition, "Celiac Disease")
        .with_localized_name("Enfermedad celíaca")
        .with_alternate_names(["Gluten-sensitive enteropathy", "Celiac sprue"])
        .with_description(
            "Immune-mediated enteropathy triggered by gluten ingestion in genetically predisposed \
             individuals (HLA-DQ2/DQ8), causing villous atrophy of the small intestine.",
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::BASIC,
                "Celiac disease is a condition where eating gluten, a protein in wheat, barley and rye, makes \
                 the immune system damage the lining of the small intestine.",
                "**What happens?**\n\n\
                 The small intestine is lined with tiny finger-like villi that absorb food. In celiac disease, \
                 gluten triggers the immune system to flatten them, so the body cannot absorb nutrients well.\n\n\
                 **Common signs:**\n\
                 - Diarrhea and bloating\n\
                 - Tiredness and low iron\n\
                 - Weight loss, or slow growth in children\n\n\
                 The treatment is a strict gluten-free diet for life.",
            )
            .with_term("gluten", "A protein found in wheat, barley, and rye")
            .with_term("villi", "Tiny finger-like projections lining the small intestine that absorb nutrients")
            .with_analogy("Healthy villi are like a shag carpet with lots of surface; in celiac disease the carpet is worn flat.")
            .with_example("A child with ongoing belly pain and low iron is tested and found to have celiac disease."),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::ADVANCED,
                "Tissue transglutaminase deamidates gliadin peptides, which are presented by HLA-DQ2/DQ8 to \
                 CD4+ T cells, causing crypt hyperplasia and villous atrophy that impair nutrient absorption.",
                "**Diagnosis:**\n\
                 - Anti-tTG IgA (first-line screening) with total IgA to exclude IgA deficiency\n\
                 - Anti-endomysial IgA (confirmatory)\n\
                 - Duodenal biopsy graded by the Marsh classification\n\
                 - HLA-DQ2/DQ8 typing (high negative predictive value)\n\n\
                 **Management:** strict lifelong gluten-free diet with iron, calcium, vitamin D, B12 and \
                 folate supplementation; monitor adherence with anti-tTG levels.",
            )
            .with_term("tissue transglutaminase", "Enzyme that modifies gliadin and is the target of the main screening antibody")
            .with_term("Marsh classification", "Histologic grading of small-bowel damage in celiac disease")
            .with_term("dermatitis herpetiformis", "Itchy blistering rash that is a skin manifestation of celiac disease")
            .with_clinical_notes(
                "Test before starting a gluten-free diet; serology and histology normalize on the diet. \
                 Non-adherent patients have increased risk of enteropathy-associated T-cell lymphoma, \
                 osteoporosis and infertility.",
            ),
        )
        .with_citation(citation(
            "acg-celiac-guideline",
            "guideline",
            "ACG Clinical Guidelines: Diagnosis and Management of Celiac Disease",
            &["American College of Gastroenterology"],
            "American Journal of Gastroenterology",
        ))
        .with_cross_reference(CrossReference::new(
            "nutrition-medical-therapy",
            "topic",
            "see-also",
            "Medical Nutrition Therapy",
        ))
        .with_tags(ContentTags {
            systems: strings(&["gastrointestinal", "immune"]),
            topics: strings(&["autoimmune", "nutrition"]),
            keywords: strings(&["gluten", "anti-tTG", "villous atrophy", "HLA-DQ2", "K90.0"]),
            clinical_relevance: Some(ClinicalRelevance::Common),
            exam_relevance: Some(ExamRelevance {
                usmle: true,
                nbme: true,
                shelf: strings(&["medicine", "pediatrics"]),
            }),
        })
        .with_status(ContentStatus::Published)
        .authored(authored, authored)
}

fn adhd() -> Entry {
    let authored = authored_on(2026, 2, 5);

    Entry::new(
        "mental-health-tdah-adhd",
        ContentKind::Condition,
        "Trastorno por Deficit de Atencion e Hiperactividad | Attention Deficit Hyperactivity Disorder",
    )
    .with_localized_name("Trastorno por Deficit de Atencion e Hiperactividad (TDAH)")
    .with_alternate_names(["TDAH | ADHD", "Deficit de Atencion | Attention Deficit", "TDA | ADD"])
    .with_level(
        LevelContent::new(
            ComplexityLevel::BASIC,
            "El TDAH es una condicion del cerebro que afecta la atencion, el control de impulsos y, a veces, \
             la actividad fisica. | ADHD is a brain condition that affects attention, impulse control, and \
             sometimes physical activity. It is not a lack of discipline or bad parenting.",
            "**Tipos de TDAH | Types of ADHD:**\n\n\
             - Predominantemente inatento | Predominantly inattentive\n\
             - Predominantemente hiperactivo-impulsivo | Predominantly hyperactive-impulsive\n\
             - Combinado | Combined (the most common type)\n\n\
             **Tratamiento | Treatment:** medications, behavioral therapy, organization strategies, and \
             school support.",
        )
        .with_term(
            "TDAH | ADHD",
            "Condicion del cerebro que afecta la atencion | Brain condition that affects attention, impulse control, and sometimes physical activity",
        )
        .with_term(
            "impulso | impulse",
            "Un deseo repentino de hacer algo sin pensar | A sudden urge to do something without thinking about the consequences",
        )
        .with_analogy(
            "Las medicinas para el TDAH son como los lentes | ADHD medications are like glasses for someone who cannot see well -- they help you focus better.",
        ),
    )
    .with_level(
        LevelContent::new(
            ComplexityLevel::ADVANCED,
            "ADHD is a neurodevelopmental disorder diagnosed clinically from persistent inattention and/or \
             hyperactivity-impulsivity that impairs functioning in two or more settings.",
            "**Evaluation:** developmental history, rating scales from multiple informants, and exclusion of \
             anxiety, trauma, autism spectrum disorder, sleep problems and vision or hearing deficits.\n\n\
             **Treatment:** stimulants (methylphenidate, amphetamines) are first line from age 6; \
             non-stimulants and behavioral therapy are alternatives or adjuncts.",
        )
        .with_term("executive functions", "Mental skills for planning, working memory, and self-control")
        .with_term("methylphenidate", "First-line stimulant medication that increases dopamine and norepinephrine signaling")
        .with_clinical_notes(
            "The diagnosis is clinical; there is no laboratory or imaging test. In Spanish-speaking children, \
             use rating scales validated in Spanish.",
        ),
    )
    .with_level(
        LevelContent::new(
            ComplexityLevel::CLINICAL,
            "Adult ADHD requires evidence of symptoms before age 12 and is usually accompanied by at least one \
             comorbid condition.",
            "**Comorbidity is the rule:** depression, anxiety and substance use disorders are common.\n\n\
             Comorbid substance use is not an absolute contraindication to stimulants but calls for close \
             monitoring and long-acting or non-stimulant options.",
        )
        .with_term("comorbidity", "A condition that occurs together with another condition")
        .with_clinical_notes(
            "Obtain collateral history for childhood onset. In bilingual patients, assess in both languages.",
        ),
    )
    .with_citation(citation(
        "dsm5tr-tdah",
        "textbook",
        "Diagnostic and Statistical Manual of Mental Disorders, Fifth Edition, Text Revision (DSM-5-TR)",
        &["American Psychiatric Association"],
        "American Psychiatric Publishing",
    ))
    .with_cross_reference(CrossReference::new(
        "mental-health-depresion-depression",
        "condition",
        "related",
        "Depresion | Depression",
    ))
    .with_tags(ContentTags {
        systems: strings(&["nervous"]),
        topics: strings(&["mental-health", "psychiatry", "neurodevelopmental", "pediatrics"]),
        keywords: strings(&["TDAH", "ADHD", "attention deficit", "hyperactivity", "stimulants"]),
        clinical_relevance: Some(ClinicalRelevance::Critical),
        exam_relevance: Some(ExamRelevance {
            usmle: true,
            nbme: true,
            shelf: strings(&["psychiatry", "pediatrics"]),
        }),
    })
    .with_status(ContentStatus::Published)
    .authored(authored, authored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_keys_match_content() {
        for entry in entries() {
            for (key, content) in &entry.levels {
                assert_eq!(*key, content.level, "entry {}", entry.id);
            }
        }
    }

    #[test]
    fn test_medical_nutrition_therapy_has_all_levels() {
        let entry = medical_nutrition_therapy();
        assert_eq!(entry.levels.len(), 5);
        assert!(entry.clinical.is_none());
    }
}
