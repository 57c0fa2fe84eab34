//! Static paper and quote-template catalog.
//!
//! Stands in for a real pricing catalog: the API serves this data from
//! its mock quotes endpoint and the wizard's "existing quote" path
//! prefills from the templates.

use crate::types::*;

/// Stock papers offered on the product step.
pub fn paper_options() -> Vec<PaperOption> {
    vec![
        PaperOption {
            id: "art-300".to_string(),
            material: "Art Paper".to_string(),
            gsm: 300,
            cost: 2.0,
        },
        PaperOption {
            id: "art-150".to_string(),
            material: "Art Paper".to_string(),
            gsm: 150,
            cost: 1.2,
        },
        PaperOption {
            id: "ivory-230".to_string(),
            material: "Ivory Board".to_string(),
            gsm: 230,
            cost: 1.8,
        },
        PaperOption {
            id: "kraft-200".to_string(),
            material: "Kraft".to_string(),
            gsm: 200,
            cost: 1.5,
        },
    ]
}

/// Saved quotes offered as templates on step 1.
pub fn quote_templates() -> Vec<QuoteTemplate> {
    vec![
        QuoteTemplate {
            id: "QT-2025-1004-729".to_string(),
            status: TemplateStatus::Done,
            date: "2025-10-04".to_string(),
            customer_name: "Gulf Printing LLC".to_string(),
            client: Client {
                client_type: ClientType::Company,
                company_name: "Gulf Printing LLC".to_string(),
                contact_person: "Samir Haddad".to_string(),
                email: "samir@gulfprinting.example".to_string(),
                phone: "501234567".to_string(),
                country_code: "+971".to_string(),
                address: "Industrial Area 4".to_string(),
                city: "Sharjah".to_string(),
                country: "UAE".to_string(),
                ..Default::default()
            },
            product: Product {
                product_name: "Business Card".to_string(),
                quantity: 1000,
                printing: PrintingMethod::Offset,
                sides: 2,
                size: SizeSpec {
                    flat: SizeCm {
                        width_cm: 9.0,
                        height_cm: 5.0,
                    },
                    close: SizeCm {
                        width_cm: 9.0,
                        height_cm: 5.0,
                    },
                },
                papers: vec![PaperOption {
                    id: "art-300".to_string(),
                    material: "Art Paper".to_string(),
                    gsm: 300,
                    cost: 2.0,
                }],
            },
            operational: Some(Operational {
                papers: vec![OperationalPaper {
                    sheet_width: Some(100.0),
                    sheet_height: Some(70.0),
                    price_per_sheet: Some(2.0),
                    entered_sheets: None,
                    recommended_sheets: 0,
                }],
                finishing: vec![FinishingLineItem {
                    name: "UV Spot".to_string(),
                    cost: Some(50.0),
                }],
                margin: 0.5,
                gutter: 0.3,
                rotate: false,
                gripper_margin: 2.0,
            }),
        },
        QuoteTemplate {
            id: "QT-2025-0917-412".to_string(),
            status: TemplateStatus::Pending,
            date: "2025-09-17".to_string(),
            customer_name: "Mariam Al Suwaidi".to_string(),
            client: Client {
                client_type: ClientType::Individual,
                contact_person: "Mariam Al Suwaidi".to_string(),
                email: "mariam@example.com".to_string(),
                phone: "529876543".to_string(),
                country_code: "+971".to_string(),
                city: "Dubai".to_string(),
                country: "UAE".to_string(),
                ..Default::default()
            },
            product: Product {
                product_name: "A5 Flyer".to_string(),
                quantity: 5000,
                printing: PrintingMethod::Digital,
                sides: 2,
                size: SizeSpec {
                    flat: SizeCm {
                        width_cm: 14.8,
                        height_cm: 21.0,
                    },
                    close: SizeCm {
                        width_cm: 14.8,
                        height_cm: 21.0,
                    },
                },
                papers: vec![PaperOption {
                    id: "art-150".to_string(),
                    material: "Art Paper".to_string(),
                    gsm: 150,
                    cost: 1.2,
                }],
            },
            operational: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_papers_have_positive_costs() {
        let papers = paper_options();
        assert!(!papers.is_empty());
        for paper in &papers {
            assert!(paper.cost > 0.0);
            assert!(paper.gsm > 0);
        }
    }

    #[test]
    fn template_ids_are_unique() {
        let templates = quote_templates();
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn template_products_reference_catalog_papers() {
        let papers = paper_options();
        for template in quote_templates() {
            for paper in &template.product.papers {
                assert!(papers.iter().any(|p| p.id == paper.id));
            }
        }
    }
}
