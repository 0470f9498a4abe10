mod guild_preference;
