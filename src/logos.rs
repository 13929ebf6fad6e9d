//! Static service-name → logo resource path lookup.
//!
//! Consulted only by the display layer; the store never touches this.

/// Logo path for a known service, looked up case-insensitively.
pub fn logo_path(service: &str) -> Option<&'static str> {
    let path = match service.to_lowercase().as_str() {
        "instagram" => "/logos/instagram.svg",
        "facebook" => "/logos/facebook.svg",
        "github" => "/logos/github.svg",
        "vercel" => "/logos/vercel.svg",
        "twitter" => "/logos/twitter.svg",
        "linkedin" => "/logos/linkedin.svg",
        "google" => "/logos/google.svg",
        "amazon" => "/logos/amazon.svg",
        "netflix" => "/logos/netflix.svg",
        "spotify" => "/logos/spotify.svg",
        "apple" => "/logos/apple.svg",
        "microsoft" => "/logos/microsoft.svg",
        "discord" => "/logos/discord.svg",
        "slack" => "/logos/slack.svg",
        "dropbox" => "/logos/dropbox.svg",
        "notion" => "/logos/notion.svg",
        "figma" => "/logos/figma.svg",
        "gitlab" => "/logos/gitlab.svg",
        "bitbucket" => "/logos/bitbucket.svg",
        "aws" => "/logos/aws.svg",
        "azure" => "/logos/azure.svg",
        "heroku" => "/logos/heroku.svg",
        "digitalocean" => "/logos/digitalocean.svg",
        "firebase" => "/logos/firebase.svg",
        "mongodb" => "/logos/mongodb.svg",
        "postgres" => "/logos/postgres.svg",
        "mysql" => "/logos/mysql.svg",
        _ => return None,
    };
    Some(path)
}
